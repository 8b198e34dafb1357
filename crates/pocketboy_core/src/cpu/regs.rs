use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Bits 0–3 are never set; `from_bits_truncate` drops them whenever a
    /// raw byte is loaded into F (e.g. by `POP AF`).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags: u8 {
        const ZERO = 0x80;
        const SUBTRACT = 0x40;
        const HALF_CARRY = 0x20;
        const CARRY = 0x10;
    }
}

impl Flags {
    /// F value for results whose only flag is zero/non-zero.
    #[inline]
    pub fn zero_only(result: u8) -> Self {
        if result == 0 {
            Flags::ZERO
        } else {
            Flags::empty()
        }
    }

    #[inline]
    pub fn zero(self) -> bool {
        self.contains(Flags::ZERO)
    }

    #[inline]
    pub fn subtract(self) -> bool {
        self.contains(Flags::SUBTRACT)
    }

    #[inline]
    pub fn half_carry(self) -> bool {
        self.contains(Flags::HALF_CARRY)
    }

    #[inline]
    pub fn carry(self) -> bool {
        self.contains(Flags::CARRY)
    }
}

/// Registers for the DMG CPU (LR35902).
///
/// Eight 8-bit registers pair up as AF, BC, DE and HL for the wide
/// operations. `m` holds the M-cycles consumed by the last instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
    pub m: u8,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.bits()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f = Flags::from_bits_truncate(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// Values the DMG boot image leaves behind when it hands control to the
    /// cartridge at 0x0100.
    pub fn post_boot() -> Self {
        Self {
            a: 0x01,
            f: Flags::ZERO | Flags::HALF_CARRY | Flags::CARRY,
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
            m: 0,
        }
    }
}
