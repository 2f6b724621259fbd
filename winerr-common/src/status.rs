//! NTSTATUS bit layout and conversions between the Windows error spaces.
//!
//! ```text
//!  3 3 2 2 2 2 2 2 2 2 2 2 1 1 1 1 1 1 1 1 1 1
//!  1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0
//! +---+-+-+-----------------------+-------------------------------+
//! |Sev|C|N|       Facility        |             Code              |
//! +---+-+-+-----------------------+-------------------------------+
//! ```
//!
//! `C` marks customer-defined values. `N` is zero in a real NTSTATUS and is
//! set by `HRESULT_FROM_NT` to mark an HRESULT that wraps one.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

const SEVERITY_SHIFT: u32 = 30;
const CUSTOMER_BIT: u32 = 1 << 29;
const N_BIT: u32 = 1 << 28;
const FACILITY_SHIFT: u32 = 16;
const FACILITY_MASK: u32 = 0x0FFF;
const CODE_MASK: u32 = 0xFFFF;

/// Facility used by `HRESULT_FROM_WIN32`.
pub const FACILITY_WIN32: u16 = 0x7;
/// Facility used by `NTSTATUS_FROM_WIN32` (`FACILITY_NTWIN32`).
pub const FACILITY_NTWIN32: u16 = 0x7;

const HRESULT_FAILURE: u32 = 0x8000_0000;
const NTSTATUS_ERROR: u32 = 0xC000_0000;

/// Severity carried in the top two bits of an NTSTATUS.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum StatusSeverity {
    Success,
    Informational,
    Warning,
    Error,
}

impl StatusSeverity {
    /// Severity of a raw NTSTATUS value.
    #[must_use]
    pub const fn of(status: u32) -> Self {
        match status >> SEVERITY_SHIFT {
            0 => Self::Success,
            1 => Self::Informational,
            2 => Self::Warning,
            _ => Self::Error,
        }
    }

    const fn bits(self) -> u32 {
        match self {
            Self::Success => 0,
            Self::Informational => 1,
            Self::Warning => 2,
            Self::Error => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Informational => "informational",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for StatusSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fields of an NTSTATUS, split out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusFields {
    pub severity: StatusSeverity,
    pub customer: bool,
    /// The `N` bit. Never set in a genuine NTSTATUS.
    pub reserved: bool,
    pub facility: u16,
    pub code: u16,
}

impl StatusFields {
    #[must_use]
    pub const fn decode(status: u32) -> Self {
        Self {
            severity: StatusSeverity::of(status),
            customer: status & CUSTOMER_BIT != 0,
            reserved: status & N_BIT != 0,
            facility: ((status >> FACILITY_SHIFT) & FACILITY_MASK) as u16,
            code: (status & CODE_MASK) as u16,
        }
    }

    /// Reassembles the raw value. Facility bits above 12 are dropped.
    #[must_use]
    pub const fn encode(&self) -> u32 {
        let mut status = self.severity.bits() << SEVERITY_SHIFT;
        if self.customer {
            status |= CUSTOMER_BIT;
        }
        if self.reserved {
            status |= N_BIT;
        }
        status | ((self.facility as u32 & FACILITY_MASK) << FACILITY_SHIFT) | self.code as u32
    }

    /// Symbolic name of the facility, for the facilities the system defines.
    #[must_use]
    pub fn facility_name(&self) -> Option<&'static str> {
        facility_name(self.facility)
    }
}

/// `NT_SUCCESS`: success or informational severity.
#[must_use]
pub const fn nt_success(status: u32) -> bool {
    (status as i32) >= 0
}

/// `NT_INFORMATION`
#[must_use]
pub const fn nt_information(status: u32) -> bool {
    status >> SEVERITY_SHIFT == 1
}

/// `NT_WARNING`
#[must_use]
pub const fn nt_warning(status: u32) -> bool {
    status >> SEVERITY_SHIFT == 2
}

/// `NT_ERROR`
#[must_use]
pub const fn nt_error(status: u32) -> bool {
    status >> SEVERITY_SHIFT == 3
}

/// `HRESULT_FROM_WIN32`. Zero and values that already look like failures
/// pass through unchanged.
#[must_use]
pub const fn hresult_from_win32(error: u32) -> u32 {
    if (error as i32) <= 0 {
        error
    } else {
        (error & CODE_MASK) | ((FACILITY_WIN32 as u32) << FACILITY_SHIFT) | HRESULT_FAILURE
    }
}

/// `HRESULT_FROM_NT`
#[must_use]
pub const fn hresult_from_nt(status: u32) -> u32 {
    status | N_BIT
}

/// `NTSTATUS_FROM_WIN32`. Zero and negative inputs pass through unchanged.
#[must_use]
pub const fn ntstatus_from_win32(error: u32) -> u32 {
    if (error as i32) <= 0 {
        error
    } else {
        (error & CODE_MASK) | ((FACILITY_NTWIN32 as u32) << FACILITY_SHIFT) | NTSTATUS_ERROR
    }
}

/// Recovers the Win32 code wrapped by [`hresult_from_win32`].
///
/// Returns `None` for HRESULTs from any other facility. `S_OK` maps to
/// `ERROR_SUCCESS`.
#[must_use]
pub const fn win32_from_hresult(hresult: u32) -> Option<u32> {
    if hresult == 0 {
        return Some(0);
    }
    let wrapped = HRESULT_FAILURE | ((FACILITY_WIN32 as u32) << FACILITY_SHIFT);
    if hresult & 0xFFFF_0000 == wrapped {
        Some(hresult & CODE_MASK)
    } else {
        None
    }
}

/// Facility names from `ntstatus.h`.
#[must_use]
pub fn facility_name(facility: u16) -> Option<&'static str> {
    let name = match facility {
        0x0 => "FACILITY_NONE",
        0x1 => "FACILITY_DEBUGGER",
        0x2 => "FACILITY_RPC_RUNTIME",
        0x3 => "FACILITY_RPC_STUBS",
        0x4 => "FACILITY_IO_ERROR_CODE",
        0x7 => "FACILITY_NTWIN32",
        0x9 => "FACILITY_NTSSPI",
        0xA => "FACILITY_TERMINAL_SERVER",
        0x10 => "FACILITY_USB_ERROR_CODE",
        0x11 => "FACILITY_HID_ERROR_CODE",
        0x12 => "FACILITY_FIREWIRE_ERROR_CODE",
        0x13 => "FACILITY_CLUSTER_ERROR_CODE",
        0x14 => "FACILITY_ACPI_ERROR_CODE",
        0x15 => "FACILITY_SXS_ERROR_CODE",
        0x19 => "FACILITY_TRANSACTION",
        0x1A => "FACILITY_COMMONLOG",
        0x1B => "FACILITY_VIDEO",
        0x1C => "FACILITY_FILTER_MANAGER",
        0x1D => "FACILITY_MONITOR",
        0x1E => "FACILITY_GRAPHICS_KERNEL",
        0x20 => "FACILITY_DRIVER_FRAMEWORK",
        0x21 => "FACILITY_FVE_ERROR_CODE",
        0x22 => "FACILITY_FWP_ERROR_CODE",
        0x23 => "FACILITY_NDIS_ERROR_CODE",
        0x35 => "FACILITY_HYPERVISOR",
        0x36 => "FACILITY_IPSEC",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_top_bits() {
        assert_eq!(StatusSeverity::of(0x0000_0000), StatusSeverity::Success);
        assert_eq!(StatusSeverity::of(0x0000_0103), StatusSeverity::Success);
        assert_eq!(StatusSeverity::of(0x4000_0000), StatusSeverity::Informational);
        assert_eq!(StatusSeverity::of(0x8000_0005), StatusSeverity::Warning);
        assert_eq!(StatusSeverity::of(0xC000_0005), StatusSeverity::Error);
    }

    #[test]
    fn test_severity_display_and_order() {
        assert_eq!(StatusSeverity::Informational.to_string(), "informational");
        assert!(StatusSeverity::Success < StatusSeverity::Error);
    }

    #[test]
    fn test_decode_access_violation() {
        let fields = StatusFields::decode(0xC000_0005);
        assert_eq!(fields.severity, StatusSeverity::Error);
        assert!(!fields.customer);
        assert!(!fields.reserved);
        assert_eq!(fields.facility, 0);
        assert_eq!(fields.code, 5);
        assert_eq!(fields.facility_name(), Some("FACILITY_NONE"));
    }

    #[test]
    fn test_decode_customer_value() {
        let fields = StatusFields::decode(0xE001_0001);
        assert_eq!(fields.severity, StatusSeverity::Error);
        assert!(fields.customer);
        assert_eq!(fields.facility, 1);
        assert_eq!(fields.code, 1);
    }

    #[test]
    fn test_decode_filter_manager_facility() {
        let fields = StatusFields::decode(0xC01C_0001);
        assert_eq!(fields.facility, 0x1C);
        assert_eq!(fields.facility_name(), Some("FACILITY_FILTER_MANAGER"));
        assert_eq!(facility_name(0xFFF), None);
    }

    #[test]
    fn test_encode_reassembles_fields() {
        let fields = StatusFields {
            severity: StatusSeverity::Warning,
            customer: false,
            reserved: false,
            facility: 0x13,
            code: 2,
        };
        assert_eq!(fields.encode(), 0x8013_0002);
    }

    #[test]
    fn test_nt_predicates() {
        assert!(nt_success(0));
        assert!(nt_success(0x4000_0000));
        assert!(!nt_success(0x8000_0005));
        assert!(nt_information(0x4000_0000));
        assert!(nt_warning(0x8000_0005));
        assert!(nt_error(0xC000_0005));
        assert!(!nt_error(0x8000_0005));
    }

    #[test]
    fn test_hresult_from_win32() {
        assert_eq!(hresult_from_win32(0), 0);
        assert_eq!(hresult_from_win32(5), 0x8007_0005);
        assert_eq!(hresult_from_win32(1326), 0x8007_052E);
        assert_eq!(hresult_from_win32(0x8007_0005), 0x8007_0005);
    }

    #[test]
    fn test_win32_from_hresult_inverts_wrapping() {
        assert_eq!(win32_from_hresult(0x8007_0005), Some(5));
        assert_eq!(win32_from_hresult(0), Some(0));
        assert_eq!(win32_from_hresult(0x8000_4005), None);
        assert_eq!(win32_from_hresult(hresult_from_win32(87)), Some(87));
    }

    #[test]
    fn test_hresult_from_nt_sets_n_bit() {
        let hr = hresult_from_nt(0xC000_0005);
        assert_eq!(hr, 0xD000_0005);
        assert!(StatusFields::decode(hr).reserved);
    }

    #[test]
    fn test_ntstatus_from_win32() {
        assert_eq!(ntstatus_from_win32(0), 0);
        assert_eq!(ntstatus_from_win32(5), 0xC007_0005);
        assert_eq!(ntstatus_from_win32(0xC000_0005), 0xC000_0005);
    }

    mod proptest_fields {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn decode_then_encode_is_identity(status in any::<u32>()) {
                prop_assert_eq!(StatusFields::decode(status).encode(), status);
            }

            #[test]
            fn nt_success_agrees_with_severity(status in any::<u32>()) {
                let severity = StatusSeverity::of(status);
                prop_assert_eq!(
                    nt_success(status),
                    matches!(severity, StatusSeverity::Success | StatusSeverity::Informational)
                );
            }
        }
    }
}
