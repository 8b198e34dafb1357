mod mbc1;

use mbc1::Mbc1;

/// Smallest image the address space maps: bank 0 plus one switchable bank.
const MIN_ROM_SIZE: usize = 0x8000;
const ROM_BANK_SIZE: usize = 0x4000;

const TITLE: std::ops::Range<usize> = 0x0134..0x0144;
const CART_TYPE: usize = 0x0147;
const RAM_SIZE: usize = 0x0149;

/// A loaded cartridge image behind its MBC1 bank controller.
pub(crate) struct Cartridge {
    title: String,
    mbc: Mbc1,
}

impl Cartridge {
    /// Wrap a raw image. Short images are padded with 0xFF up to 32 KiB and
    /// longer ones up to a whole number of 16 KiB banks.
    pub(crate) fn new(mut rom: Vec<u8>) -> Self {
        let padded = rom.len().max(MIN_ROM_SIZE).next_multiple_of(ROM_BANK_SIZE);
        if padded != rom.len() {
            log::debug!("Padding cartridge image from {} to {} bytes", rom.len(), padded);
            rom.resize(padded, 0xFF);
        }

        let title = rom[TITLE]
            .iter()
            .take_while(|&&b| b != 0)
            .filter(|b| b.is_ascii_graphic() || **b == b' ')
            .map(|&b| b as char)
            .collect::<String>()
            .trim_end()
            .to_string();
        let cart_type = rom[CART_TYPE];
        let ram_banks = ram_banks_from_header(rom[RAM_SIZE]);
        let rom_banks = rom.len() / ROM_BANK_SIZE;

        log::info!(
            "Cartridge \"{title}\": type=0x{cart_type:02X} rom_banks={rom_banks} ram_banks={ram_banks}"
        );

        Self {
            title,
            mbc: Mbc1::new(rom, ram_banks),
        }
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub(crate) fn rom_read(&self, addr: u16) -> u8 {
        self.mbc.rom_read(addr)
    }

    /// Writes into ROM space program the bank controller.
    #[inline]
    pub(crate) fn rom_write(&mut self, addr: u16, value: u8) {
        self.mbc.control_write(addr, value);
    }

    #[inline]
    pub(crate) fn ram_read(&self, addr: u16) -> u8 {
        self.mbc.ram_read(addr)
    }

    #[inline]
    pub(crate) fn ram_write(&mut self, addr: u16, value: u8) {
        self.mbc.ram_write(addr, value);
    }

    /// Bank currently mapped at 0x4000-0x7FFF.
    pub(crate) fn rom_bank(&self) -> u8 {
        self.mbc.rom_bank()
    }
}

/// Number of 8 KiB external RAM banks declared by header byte 0x149.
fn ram_banks_from_header(code: u8) -> usize {
    match code {
        0x01 | 0x02 => 1, // 2 KiB is rounded up to one 8 KiB bank
        0x03 => 4,
        0x04 => 16,
        0x05 => 8,
        _ => 0,
    }
}
