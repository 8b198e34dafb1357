use thiserror::Error;

/// Fatal conditions raised by the emulation core.
///
/// Every variant leaves the machine in a state that must not be stepped
/// again; callers are expected to report the error and stop.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown {} opcode 0x{opcode:02X} at PC=0x{pc:04X}", table_name(.prefixed))]
    UnknownOpcode { opcode: u8, pc: u16, prefixed: bool },

    #[error("boot image must be exactly {expected} bytes, got {actual}")]
    BootImageSize { expected: usize, actual: usize },
}

fn table_name(prefixed: &bool) -> &'static str {
    if *prefixed {
        "CB-prefixed"
    } else {
        "main"
    }
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
