//! SMBIOS Structure Types
//!
//! Type code registry and the human-readable category names published in
//! the `description` column. The names are matched by downstream consumers
//! and must not be reworded.

use static_assertions::const_assert_eq;

// =============================================================================
// STRUCTURE TYPES
// =============================================================================

/// SMBIOS structure types
pub mod structure_type {
    /// BIOS information (Type 0)
    pub const BIOS_INFORMATION: u8 = 0;
    /// System information (Type 1)
    pub const SYSTEM_INFORMATION: u8 = 1;
    /// Baseboard information (Type 2)
    pub const BASEBOARD_INFORMATION: u8 = 2;
    /// System enclosure (Type 3)
    pub const SYSTEM_ENCLOSURE: u8 = 3;
    /// Processor information (Type 4)
    pub const PROCESSOR_INFORMATION: u8 = 4;
    /// Memory controller (Type 5)
    pub const MEMORY_CONTROLLER: u8 = 5;
    /// Memory module (Type 6)
    pub const MEMORY_MODULE: u8 = 6;
    /// Cache information (Type 7)
    pub const CACHE_INFORMATION: u8 = 7;
    /// Port connector (Type 8)
    pub const PORT_CONNECTOR: u8 = 8;
    /// System slots (Type 9)
    pub const SYSTEM_SLOTS: u8 = 9;
    /// On-board devices (Type 10)
    pub const ON_BOARD_DEVICES: u8 = 10;
    /// OEM strings (Type 11)
    pub const OEM_STRINGS: u8 = 11;
    /// System configuration options (Type 12)
    pub const SYSTEM_CONFIG_OPTIONS: u8 = 12;
    /// BIOS language (Type 13)
    pub const BIOS_LANGUAGE: u8 = 13;
    /// Group associations (Type 14)
    pub const GROUP_ASSOCIATIONS: u8 = 14;
    /// System event log (Type 15)
    pub const SYSTEM_EVENT_LOG: u8 = 15;
    /// Physical memory array (Type 16)
    pub const PHYSICAL_MEMORY_ARRAY: u8 = 16;
    /// Memory device (Type 17)
    pub const MEMORY_DEVICE: u8 = 17;
    /// 32-bit memory error (Type 18)
    pub const MEMORY_ERROR_32BIT: u8 = 18;
    /// Memory array mapped address (Type 19)
    pub const MEMORY_ARRAY_MAPPED_ADDRESS: u8 = 19;
    /// Memory device mapped address (Type 20)
    pub const MEMORY_DEVICE_MAPPED_ADDRESS: u8 = 20;
    /// Built-in pointing device (Type 21)
    pub const BUILT_IN_POINTING_DEVICE: u8 = 21;
    /// Portable battery (Type 22)
    pub const PORTABLE_BATTERY: u8 = 22;
    /// System reset (Type 23)
    pub const SYSTEM_RESET: u8 = 23;
    /// Hardware security (Type 24)
    pub const HARDWARE_SECURITY: u8 = 24;
    /// System power controls (Type 25)
    pub const SYSTEM_POWER_CONTROLS: u8 = 25;
    /// Voltage probe (Type 26)
    pub const VOLTAGE_PROBE: u8 = 26;
    /// Cooling device (Type 27)
    pub const COOLING_DEVICE: u8 = 27;
    /// Temperature probe (Type 28)
    pub const TEMPERATURE_PROBE: u8 = 28;
    /// Electrical current probe (Type 29)
    pub const ELECTRICAL_CURRENT_PROBE: u8 = 29;
    /// Out-of-band remote access (Type 30)
    pub const OUT_OF_BAND_REMOTE_ACCESS: u8 = 30;
    /// Boot integrity services (Type 31)
    pub const BOOT_INTEGRITY_SERVICES: u8 = 31;
    /// System boot information (Type 32)
    pub const SYSTEM_BOOT_INFORMATION: u8 = 32;
    /// 64-bit memory error (Type 33)
    pub const MEMORY_ERROR_64BIT: u8 = 33;
    /// Management device (Type 34)
    pub const MANAGEMENT_DEVICE: u8 = 34;
    /// Management device component (Type 35)
    pub const MANAGEMENT_DEVICE_COMPONENT: u8 = 35;
    /// Management device threshold (Type 36)
    pub const MANAGEMENT_DEVICE_THRESHOLD: u8 = 36;
    /// Memory channel (Type 37)
    pub const MEMORY_CHANNEL: u8 = 37;
    /// IPMI device (Type 38)
    pub const IPMI_DEVICE: u8 = 38;
    /// System power supply (Type 39)
    pub const SYSTEM_POWER_SUPPLY: u8 = 39;
    /// Additional information (Type 40)
    pub const ADDITIONAL_INFORMATION: u8 = 40;
    /// Onboard devices extended (Type 41)
    pub const ONBOARD_DEVICES_EXTENDED: u8 = 41;
    /// Inactive structure (Type 126)
    pub const INACTIVE: u8 = 126;
    /// End of table (Type 127)
    pub const END_OF_TABLE: u8 = 127;
    /// Memory SPD data (Apple, Type 130)
    pub const MEMORY_SPD_DATA: u8 = 130;
    /// OEM processor type (Apple, Type 131)
    pub const OEM_PROCESSOR_TYPE: u8 = 131;
    /// OEM processor bus speed (Apple, Type 132)
    pub const OEM_PROCESSOR_BUS_SPEED: u8 = 132;
}

/// Every type code with a description, ascending
pub const KNOWN_TYPES: &[u8] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 126, 127, 130, 131, 132,
];

const_assert_eq!(KNOWN_TYPES.len(), 47);

// =============================================================================
// DESCRIPTIONS
// =============================================================================

/// Describe a structure type
///
/// Returns `None` for codes outside the registry; such structures are still
/// decoded, they just carry no description.
#[must_use]
pub const fn describe(code: u8) -> Option<&'static str> {
    use structure_type::*;

    Some(match code {
        BIOS_INFORMATION => "BIOS Information",
        SYSTEM_INFORMATION => "System Information",
        BASEBOARD_INFORMATION => "Base Board or Module Information",
        SYSTEM_ENCLOSURE => "System Enclosure or Chassis",
        PROCESSOR_INFORMATION => "Processor Information",
        MEMORY_CONTROLLER => "Memory Controller Information",
        MEMORY_MODULE => "Memory Module Information",
        CACHE_INFORMATION => "Cache Information",
        PORT_CONNECTOR => "Port Connector Information",
        SYSTEM_SLOTS => "System Slots",
        ON_BOARD_DEVICES => "On Board Devices Information",
        OEM_STRINGS => "OEM Strings",
        SYSTEM_CONFIG_OPTIONS => "System Configuration Options",
        BIOS_LANGUAGE => "BIOS Language Information",
        GROUP_ASSOCIATIONS => "Group Associations",
        SYSTEM_EVENT_LOG => "System Event Log",
        PHYSICAL_MEMORY_ARRAY => "Physical Memory Array",
        MEMORY_DEVICE => "Memory Device",
        MEMORY_ERROR_32BIT => "32-bit Memory Error Information",
        MEMORY_ARRAY_MAPPED_ADDRESS => "Memory Array Mapped Address",
        MEMORY_DEVICE_MAPPED_ADDRESS => "Memory Device Mapped Address",
        BUILT_IN_POINTING_DEVICE => "Built-in Pointing Device",
        PORTABLE_BATTERY => "Portable Battery",
        SYSTEM_RESET => "System Reset",
        HARDWARE_SECURITY => "Hardware Security",
        SYSTEM_POWER_CONTROLS => "System Power Controls",
        VOLTAGE_PROBE => "Voltage Probe",
        COOLING_DEVICE => "Cooling Device",
        TEMPERATURE_PROBE => "Temperature Probe",
        ELECTRICAL_CURRENT_PROBE => "Electrical Current Probe",
        OUT_OF_BAND_REMOTE_ACCESS => "Out-of-Band Remote Access",
        BOOT_INTEGRITY_SERVICES => "Boot Integrity Services",
        SYSTEM_BOOT_INFORMATION => "System Boot Information",
        MEMORY_ERROR_64BIT => "64-bit Memory Error Information",
        MANAGEMENT_DEVICE => "Management Device",
        MANAGEMENT_DEVICE_COMPONENT => "Management Device Component",
        MANAGEMENT_DEVICE_THRESHOLD => "Management Device Threshold Data",
        MEMORY_CHANNEL => "Memory Channel",
        IPMI_DEVICE => "IPMI Device Information",
        SYSTEM_POWER_SUPPLY => "System Power Supply",
        ADDITIONAL_INFORMATION => "Additional Information",
        ONBOARD_DEVICES_EXTENDED => "Onboard Devices Extended Info",
        INACTIVE => "Inactive",
        END_OF_TABLE => "End-of-Table",
        MEMORY_SPD_DATA => "Memory SPD Data",
        OEM_PROCESSOR_TYPE => "OEM Processor Type",
        OEM_PROCESSOR_BUS_SPEED => "OEM Processor Bus Speed",
        _ => return None,
    })
}

// =============================================================================
// TESTS
// =============================================================================
