const ROM_BANK_SIZE: usize = 0x4000;
const RAM_BANK_SIZE: usize = 0x2000;

/// How writes to 0x4000-0x5FFF are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum BankingMode {
    /// The 2-bit field supplies ROM bank bits 5-6.
    #[default]
    Rom,
    /// The 2-bit field selects the external RAM bank.
    Ram,
}

/// MBC1 bank controller state and the memory it arbitrates.
pub(super) struct Mbc1 {
    rom: Vec<u8>,
    ram: Vec<u8>,
    /// Selected switchable ROM bank. Never 0.
    rom_bank: u8,
    ram_bank: u8,
    ram_enabled: bool,
    mode: BankingMode,
}

impl Mbc1 {
    pub(super) fn new(rom: Vec<u8>, ram_banks: usize) -> Self {
        Self {
            rom,
            ram: vec![0; ram_banks * RAM_BANK_SIZE],
            rom_bank: 1,
            ram_bank: 0,
            ram_enabled: false,
            mode: BankingMode::Rom,
        }
    }

    pub(super) fn rom_bank(&self) -> u8 {
        self.rom_bank
    }

    fn rom_banks(&self) -> usize {
        self.rom.len() / ROM_BANK_SIZE
    }

    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        let offset = (addr & 0x3FFF) as usize;
        let index = if addr < 0x4000 {
            offset
        } else {
            // Banks past the end of the image alias modulo the bank count.
            let bank = self.rom_bank as usize % self.rom_banks().max(1);
            bank * ROM_BANK_SIZE + offset
        };
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    pub(super) fn control_write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => {
                self.ram_enabled = value & 0x0F == 0x0A;
            }
            0x2000..=0x3FFF => {
                let low = match value & 0x1F {
                    0 => 1,
                    bits => bits,
                };
                self.rom_bank = (self.rom_bank & 0x60) | low;
                log::debug!("MBC1: ROM bank -> {}", self.rom_bank);
            }
            0x4000..=0x5FFF => match self.mode {
                BankingMode::Ram => {
                    self.ram_bank = value & 0x03;
                    log::debug!("MBC1: RAM bank -> {}", self.ram_bank);
                }
                BankingMode::Rom => {
                    self.rom_bank = (self.rom_bank & 0x1F) | ((value & 0x03) << 5);
                    log::debug!("MBC1: ROM bank -> {}", self.rom_bank);
                }
            },
            0x6000..=0x7FFF => {
                self.mode = if value & 0x01 == 0 {
                    BankingMode::Rom
                } else {
                    BankingMode::Ram
                };
            }
            _ => {}
        }
    }

    fn ram_index(&self, addr: u16) -> Option<usize> {
        if !self.ram_enabled || self.ram.is_empty() {
            return None;
        }
        let index = self.ram_bank as usize * RAM_BANK_SIZE + (addr as usize & 0x1FFF);
        Some(index % self.ram.len())
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        self.ram_index(addr).map_or(0xFF, |i| self.ram[i])
    }

    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        if let Some(i) = self.ram_index(addr) {
            self.ram[i] = value;
        }
    }
}
