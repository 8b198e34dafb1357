use super::*;
use crate::CoreError;

struct TestBus {
    memory: [u8; 0x10000],
    ticks: u64,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
            ticks: 0,
        }
    }
}

impl TestBus {
    fn with_program(origin: u16, program: &[u8]) -> Self {
        let mut bus = Self::default();
        let start = origin as usize;
        bus.memory[start..start + program.len()].copy_from_slice(program);
        bus
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn tick(&mut self, m_cycles: u8) {
        self.ticks += m_cycles as u64;
    }

    fn interrupt_pending(&mut self) -> bool {
        self.memory[0xFFFF] & self.memory[0xFF0F] & 0x1F != 0
    }
}

fn step(cpu: &mut Cpu, bus: &mut TestBus) -> u8 {
    cpu.step(bus).expect("opcode should be mapped")
}

#[test]
fn nop_advances_pc_and_clock() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x00]);

    assert_eq!(step(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(cpu.regs.m, 1);
    assert_eq!(cpu.clock, 1);
    assert_eq!(bus.ticks, 1);
}

#[test]
fn ld_b_d8_reads_immediate() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x06, 0x42]);

    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.b, 0x42);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn xor_a_clears_accumulator_and_sets_only_zero() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xAF]);
    cpu.regs.a = 0x5A;
    cpu.regs.f = Flags::CARRY | Flags::SUBTRACT;

    assert_eq!(step(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f.bits(), 0x80);
}

#[test]
fn jr_minus_two_loops_on_itself() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x18, 0xFE]);

    for _ in 0..3 {
        assert_eq!(step(&mut cpu, &mut bus), 3);
        assert_eq!(cpu.regs.pc, 0x0000);
    }
}

#[test]
fn jr_forward_and_backward_offsets() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0100, &[0x18, 0x05]);
    cpu.regs.pc = 0x0100;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0107);

    bus.memory[0x0107] = 0x18;
    bus.memory[0x0108] = 0x80;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0109 - 128);
}

#[test]
fn wide_increment_carries_into_high_byte() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x03, 0x0B, 0x0B, 0x23]);
    cpu.regs.set_bc(0x00FF);
    cpu.regs.f = Flags::CARRY;

    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!((cpu.regs.b, cpu.regs.c), (0x01, 0x00));

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.bc(), 0x00FF);

    cpu.regs.set_bc(0x0000);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.bc(), 0xFFFF);

    cpu.regs.set_hl(0xFFFF);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.hl(), 0x0000);

    // Wide increments leave F alone.
    assert_eq!(cpu.regs.f, Flags::CARRY);
}

#[test]
fn byte_inc_dec_overwrite_flags_with_zero_bit_only() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x04, 0x04, 0x05, 0x05]);
    cpu.regs.b = 0xFF;
    cpu.regs.f = Flags::CARRY | Flags::HALF_CARRY;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x00);
    assert_eq!(cpu.regs.f.bits(), 0x80);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x01);
    assert_eq!(cpu.regs.f.bits(), 0x00);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x00);
    assert_eq!(cpu.regs.f.bits(), 0x80);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0xFF);
    assert_eq!(cpu.regs.f.bits(), 0x00);
}

#[test]
fn inc_hl_indirect_updates_memory() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x34]);
    cpu.regs.set_hl(0xC010);
    bus.memory[0xC010] = 0x41;

    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(bus.memory[0xC010], 0x42);
}

#[test]
fn add_sets_carry_half_carry_and_zero() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x80, 0x80]);
    cpu.regs.a = 0x3A;
    cpu.regs.b = 0xC6;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, Flags::ZERO | Flags::HALF_CARRY | Flags::CARRY);

    cpu.regs.a = 0x0F;
    cpu.regs.b = 0x01;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x10);
    assert_eq!(cpu.regs.f, Flags::HALF_CARRY);
}

#[test]
fn adc_includes_incoming_carry() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xCE, 0x01]);
    cpu.regs.a = 0xFE;
    cpu.regs.f = Flags::CARRY;

    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.f.zero());
    assert!(cpu.regs.f.carry());
    assert!(cpu.regs.f.half_carry());
}

#[test]
fn sub_stores_difference_and_sets_subtract() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x90, 0x90]);
    cpu.regs.a = 0x05;
    cpu.regs.b = 0x03;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x02);
    assert_eq!(cpu.regs.f, Flags::SUBTRACT);

    cpu.regs.b = 0x03;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.regs.f.carry());
    assert!(cpu.regs.f.subtract());
    assert!(!cpu.regs.f.zero());
}

#[test]
fn cp_compares_without_storing() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xFE, 0x20, 0xFE, 0x42]);
    cpu.regs.a = 0x10;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x10);
    assert_eq!(cpu.regs.f, Flags::SUBTRACT | Flags::CARRY);

    cpu.regs.a = 0x42;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x42);
    assert_eq!(cpu.regs.f, Flags::ZERO | Flags::SUBTRACT);
}

#[test]
fn and_sets_half_carry() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xE6, 0x0F]);
    cpu.regs.a = 0xF0;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, Flags::ZERO | Flags::HALF_CARRY);
}

#[test]
fn daa_adjusts_bcd_addition() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x80, 0x27]);
    cpu.regs.a = 0x45;
    cpu.regs.b = 0x38;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x7D);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x83);
    assert!(!cpu.regs.f.carry());
}

#[test]
fn add_hl_keeps_zero_and_reports_bit_eleven_carry() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x09]);
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.regs.f = Flags::ZERO | Flags::SUBTRACT;

    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert_eq!(cpu.regs.f, Flags::ZERO | Flags::HALF_CARRY);
}

#[test]
fn ld_hl_sp_offset() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xF8, 0x02, 0xF8, 0xFF]);
    cpu.regs.sp = 0xFFF8;

    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.hl(), 0xFFFA);
    assert_eq!(cpu.regs.f, Flags::empty());

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.hl(), 0xFFF7);
    assert_eq!(cpu.regs.sp, 0xFFF8);
}

#[test]
fn ld_hl_increment_and_decrement_forms() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x22, 0x32, 0x2A]);
    cpu.regs.a = 0x77;
    cpu.regs.set_hl(0xC000);

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC000], 0x77);
    assert_eq!(cpu.regs.hl(), 0xC001);

    cpu.regs.a = 0x66;
    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC001], 0x66);
    assert_eq!(cpu.regs.hl(), 0xC000);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x77);
    assert_eq!(cpu.regs.hl(), 0xC001);
}

#[test]
fn ld_a16_sp_stores_little_endian() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x08, 0x00, 0xC1]);
    cpu.regs.sp = 0xBEEF;

    assert_eq!(step(&mut cpu, &mut bus), 5);
    assert_eq!(bus.memory[0xC100], 0xEF);
    assert_eq!(bus.memory[0xC101], 0xBE);
}

#[test]
fn call_and_ret_use_stack() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0100, &[0xCD, 0x00, 0x02]);
    bus.memory[0x0200] = 0xC9;
    cpu.regs.pc = 0x0100;
    cpu.regs.sp = 0xFFFE;

    assert_eq!(step(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert_eq!(bus.memory[0xFFFC], 0x03);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn rst_pushes_return_address() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0150, &[0xEF]);
    cpu.regs.pc = 0x0150;
    cpu.regs.sp = 0xD000;

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.memory[0xCFFF], 0x01);
    assert_eq!(bus.memory[0xCFFE], 0x51);
}

#[test]
fn push_pop_round_trip_through_memory() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xC5, 0xD1]);
    cpu.regs.set_bc(0x1234);
    cpu.regs.sp = 0xFFFE;

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(bus.memory[0xFFFD], 0x12);
    assert_eq!(bus.memory[0xFFFC], 0x34);

    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.de(), 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn pop_af_drops_low_flag_nibble() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xF1]);
    cpu.regs.sp = 0xC000;
    bus.memory[0xC000] = 0xFF;
    bus.memory[0xC001] = 0x12;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f.bits(), 0xF0);
    assert_eq!(cpu.regs.af(), 0x12F0);
}

#[test]
fn af_pack_unpack_masks_low_nibble() {
    let mut regs = Registers::default();
    for value in 0..=u16::MAX {
        regs.set_af(value);
        assert_eq!(regs.af(), value & 0xFFF0);
    }
}

#[test]
fn conditional_branches_charge_surcharge_only_when_taken() {
    // JR NZ,+2
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x20, 0x02]);
    cpu.regs.f = Flags::ZERO;
    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.pc, 0x0002);

    cpu.regs.pc = 0x0000;
    cpu.regs.f = Flags::empty();
    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0004);

    // JP C,a16
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xDA, 0x00, 0x40]);
    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0003);

    cpu.regs.pc = 0x0000;
    cpu.regs.f = Flags::CARRY;
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x4000);

    // CALL NZ,a16
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xC4, 0x34, 0x12]);
    cpu.regs.sp = 0xFFFE;
    cpu.regs.f = Flags::ZERO;
    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.sp, 0xFFFE);

    cpu.regs.pc = 0x0000;
    cpu.regs.f = Flags::empty();
    assert_eq!(step(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFC);

    // RET Z
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xC8]);
    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0x00;
    bus.memory[0xFFFD] = 0x30;
    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.pc, 0x0001);

    cpu.regs.pc = 0x0000;
    cpu.regs.f = Flags::ZERO;
    assert_eq!(step(&mut cpu, &mut bus), 5);
    assert_eq!(cpu.regs.pc, 0x3000);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn prefix_applies_to_exactly_one_fetch() {
    // CB 7C = BIT 7,H; the following 7C is LD A,H again.
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xCB, 0x7C, 0x7C]);
    cpu.regs.h = 0x80;
    cpu.regs.f = Flags::CARRY;

    assert_eq!(step(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.dispatch_mode(), DispatchMode::Prefixed);
    assert_eq!(cpu.regs.pc, 0x0001);

    assert_eq!(step(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.dispatch_mode(), DispatchMode::Normal);
    assert_eq!(cpu.regs.f, Flags::HALF_CARRY | Flags::CARRY);
    assert_eq!(cpu.regs.a, 0x00);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert_eq!(cpu.regs.pc, 0x0003);
}

#[test]
fn bit_on_clear_bit_sets_zero() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0xCB, 0x46]);
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0xFE;

    step(&mut cpu, &mut bus);
    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.f, Flags::ZERO | Flags::HALF_CARRY);
}

#[test]
fn prefixed_shift_res_and_set() {
    // SWAP A, SRL B, RES 0,A, SET 7,(HL)
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(
        0x0000,
        &[0xCB, 0x37, 0xCB, 0x38, 0xCB, 0x87, 0xCB, 0xFE],
    );
    cpu.regs.a = 0xF1;
    cpu.regs.b = 0x01;
    cpu.regs.set_hl(0xC000);

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x1F);
    assert_eq!(cpu.regs.f, Flags::empty());

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x00);
    assert_eq!(cpu.regs.f, Flags::ZERO | Flags::CARRY);

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x1E);

    step(&mut cpu, &mut bus);
    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(bus.memory[0xC000], 0x80);
}

#[test]
fn accumulator_rotates_clear_zero() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x07, 0x17]);
    cpu.regs.a = 0x80;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.f, Flags::CARRY);

    cpu.regs.a = 0x00;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.f, Flags::empty());
}

#[test]
fn right_rotates_wrap_bit_zero() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x0F, 0x1F, 0x1F]);
    cpu.regs.a = 0x01;

    // RRCA: bit 0 goes to both bit 7 and C.
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert_eq!(cpu.regs.f, Flags::CARRY);

    // RRA: the old C enters bit 7, bit 0 leaves into C.
    cpu.regs.a = 0x00;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert_eq!(cpu.regs.f, Flags::empty());

    cpu.regs.a = 0x01;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, Flags::CARRY);
}

#[test]
fn unknown_opcode_is_fatal_and_leaves_pc() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0200, &[0xD3]);
    cpu.regs.pc = 0x0200;

    let err = cpu.step(&mut bus).unwrap_err();
    assert!(matches!(
        err,
        CoreError::UnknownOpcode {
            opcode: 0xD3,
            pc: 0x0200,
            prefixed: false
        }
    ));
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.clock, 0);
}

#[test]
fn halt_idles_until_interrupt_requested() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x76, 0x00]);

    step(&mut cpu, &mut bus);
    assert!(cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0001);

    for _ in 0..4 {
        assert_eq!(step(&mut cpu, &mut bus), 1);
        assert_eq!(cpu.regs.pc, 0x0001);
    }

    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;
    step(&mut cpu, &mut bus);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn stop_consumes_padding_byte() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0000, &[0x10, 0x00, 0x00]);

    assert_eq!(step(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn catalog_maps_all_but_hardware_holes() {
    let unmapped: Vec<usize> = MAIN_TABLE
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.opcode().is_none())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(
        unmapped,
        vec![0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD]
    );
    assert!(PREFIXED_TABLE.iter().all(|slot| slot.opcode().is_some()));

    for slot in MAIN_TABLE.iter().chain(PREFIXED_TABLE.iter()) {
        if let Some(op) = slot.opcode() {
            assert!((1..=3).contains(&op.length));
            assert!(op.cycles >= 1);
        }
    }
}

#[test]
fn catalog_mnemonics() {
    let name = |mode, byte| lookup(mode, byte).map(|op| op.to_string());
    assert_eq!(name(DispatchMode::Normal, 0x00).as_deref(), Some("NOP"));
    assert_eq!(name(DispatchMode::Normal, 0x06).as_deref(), Some("LD B,d8"));
    assert_eq!(name(DispatchMode::Normal, 0x20).as_deref(), Some("JR NZ,r8"));
    assert_eq!(name(DispatchMode::Normal, 0x7E).as_deref(), Some("LD A,(HL)"));
    assert_eq!(name(DispatchMode::Normal, 0xAF).as_deref(), Some("XOR A"));
    assert_eq!(name(DispatchMode::Normal, 0xC9).as_deref(), Some("RET"));
    assert_eq!(name(DispatchMode::Normal, 0xEF).as_deref(), Some("RST 28H"));
    assert_eq!(name(DispatchMode::Normal, 0xCB).as_deref(), Some("PREFIX CB"));
    assert_eq!(name(DispatchMode::Prefixed, 0x7C).as_deref(), Some("BIT 7,H"));
    assert_eq!(name(DispatchMode::Prefixed, 0x11).as_deref(), Some("RL C"));
    assert_eq!(name(DispatchMode::Normal, 0xD3), None);
}
