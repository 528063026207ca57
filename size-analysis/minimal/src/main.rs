#![no_std]
#![no_main]

use core::cell::Cell;
use cortex_m::interrupt::Mutex;
use cortex_m::peripheral::syst::SystClkSource;
use interval_timer::{IntervalTimer, ResetMode, minutes_to_millis, seconds_to_millis};
use panic_halt as _;

// SysTick reload for a 1 ms tick at the 8 MHz reset clock
const TICKS_PER_MILLI: u32 = 8_000;

static MILLIS: Mutex<Cell<u64>> = Mutex::new(Cell::new(0));

// Millisecond clock fed by SysTick
fn millis() -> u64 {
    cortex_m::interrupt::free(|cs| MILLIS.borrow(cs).get())
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let Some(mut cp) = cortex_m::Peripherals::take() else {
        loop {
            cortex_m::asm::nop();
        }
    };

    cp.SYST.set_clock_source(SystClkSource::Core);
    cp.SYST.set_reload(TICKS_PER_MILLI - 1);
    cp.SYST.clear_current();
    cp.SYST.enable_counter();
    cp.SYST.enable_interrupt();

    let clock: fn() -> u64 = millis;
    let mut fast = IntervalTimer::with_interval(clock, seconds_to_millis(0.5));
    let mut slow = IntervalTimer::new(clock);
    slow.set_interval(minutes_to_millis(1.0), ResetMode::Reset);

    // Touch every operation so all code paths are included
    // Use black_box to prevent optimizer from removing the code
    slow.override_interval_reached();
    let _ = core::hint::black_box(slow.time_left_millis());
    let _ = core::hint::black_box(slow.time_passed_millis());
    let _ = core::hint::black_box(slow.state());

    let mut fast_count: u32 = 0;
    loop {
        if fast.interval_reached() {
            fast_count = fast_count.wrapping_add(1);
        }
        if slow.interval_reached() {
            if fast.is_active() {
                fast.deactivate();
            } else {
                fast.activate();
            }
            slow.reset_interval();
        }
        core::hint::black_box(fast_count);
        cortex_m::asm::wfi();
    }
}

#[cortex_m_rt::exception]
fn SysTick() {
    cortex_m::interrupt::free(|cs| {
        let millis = MILLIS.borrow(cs);
        millis.set(millis.get() + 1);
    });
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
