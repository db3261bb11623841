#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use {defmt_rtt as _, panic_probe as _};

#[cfg(target_os = "none")]
mod alarm;

#[cfg(target_os = "none")]
#[rtic::app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use crate::alarm::PeriodicAlarm;
    use defmt::Debug2Format;
    use lcd_stopwatch::config::XOSC_CRYSTAL_FREQ;
    use lcd_stopwatch::{startup, Hd44780, ProgressBar, Stopwatch};
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        gpio::{DynPinId, FunctionSioOutput, Pin, PullDown},
        sio::Sio,
        timer::{Alarm0, Alarm1, Timer},
        watchdog::Watchdog,
    };

    // Wiring: RS=GP16, E=GP17, D4..D7=GP18..GP21, RW=GND
    type LcdPin = Pin<DynPinId, FunctionSioOutput, PullDown>;
    type Lcd = Hd44780<LcdPin, cortex_m::delay::Delay>;

    #[shared]
    struct Shared {
        // both writers run at the same priority and never preempt each other
        #[lock_free]
        lcd: Lcd,
    }

    #[local]
    struct Local {
        clock_alarm: PeriodicAlarm<Alarm0>,
        progress_alarm: PeriodicAlarm<Alarm1>,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            XOSC_CRYSTAL_FREQ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let delay =
            cortex_m::delay::Delay::new(ctx.core.SYST, clocks.system_clock.freq().to_Hz());
        let mut lcd = Hd44780::new(
            pins.gpio16.into_push_pull_output().into_dyn_pin(),
            pins.gpio17.into_push_pull_output().into_dyn_pin(),
            [
                pins.gpio18.into_push_pull_output().into_dyn_pin(),
                pins.gpio19.into_push_pull_output().into_dyn_pin(),
                pins.gpio20.into_push_pull_output().into_dyn_pin(),
                pins.gpio21.into_push_pull_output().into_dyn_pin(),
            ],
            delay,
        );

        // glyphs go in before any alarm can fire
        lcd.init().unwrap();
        startup::prepare_display(&mut lcd).unwrap();
        defmt::info!("display ready");

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut clock_alarm = PeriodicAlarm::new(timer.alarm_0().unwrap());
        let mut progress_alarm = PeriodicAlarm::new(timer.alarm_1().unwrap());
        if let Err(e) = startup::arm(&mut clock_alarm, &mut progress_alarm) {
            defmt::panic!("arming alarms failed: {}", Debug2Format(&e));
        }
        defmt::info!("alarms armed, starting stopwatch");

        (
            Shared { lcd },
            Local {
                clock_alarm,
                progress_alarm,
            },
            init::Monotonics(),
        )
    }

    #[idle]
    fn idle(_: idle::Context) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }

    // Tick Source A, every 16 ms
    #[task(
        binds = TIMER_IRQ_0,
        priority = 1,
        shared = [lcd],
        local = [clock_alarm, stopwatch: Stopwatch = Stopwatch::new()]
    )]
    fn clock_tick(ctx: clock_tick::Context) {
        if let Err(e) = ctx.local.clock_alarm.acknowledge() {
            defmt::error!("clock alarm re-arm failed: {}", Debug2Format(&e));
        }

        match ctx.local.stopwatch.on_tick(ctx.shared.lcd) {
            Ok(Some(reading)) if reading.tenths == 0 => defmt::debug!("{}", reading),
            Ok(_) => {}
            Err(e) => defmt::warn!("clock render failed: {}", Debug2Format(&e)),
        }
    }

    // Tick Source B, every second
    #[task(
        binds = TIMER_IRQ_1,
        priority = 1,
        shared = [lcd],
        local = [progress_alarm, progress: ProgressBar = ProgressBar::new()]
    )]
    fn progress_tick(ctx: progress_tick::Context) {
        if let Err(e) = ctx.local.progress_alarm.acknowledge() {
            defmt::error!("progress alarm re-arm failed: {}", Debug2Format(&e));
        }

        match ctx.local.progress.on_tick(ctx.shared.lcd) {
            Ok(length) => defmt::trace!("bar length {}", length),
            Err(e) => defmt::warn!("bar render failed: {}", Debug2Format(&e)),
        }
    }
}

/// Console preview: drives both state machines from a simulated 16 ms tick
/// stream and prints the display once per simulated second.
#[cfg(not(target_os = "none"))]
fn main() {
    use core::convert::Infallible;
    use lcd_stopwatch::config::{CLOCK_TICK_PERIOD, PROGRESS_TICK_PERIOD};
    use lcd_stopwatch::{startup, Frame, ProgressBar, Stopwatch};

    fn infallible<T>(result: Result<T, Infallible>) -> T {
        match result {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    let seconds: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(65);

    let mut frame = Frame::new();
    let mut watch = Stopwatch::new();
    let mut bar = ProgressBar::new();
    infallible(startup::prepare_display(&mut frame));

    let clock_us = u64::from(CLOCK_TICK_PERIOD.to_micros());
    let progress_us = u64::from(PROGRESS_TICK_PERIOD.to_micros());
    let mut elapsed_us: u64 = 0;

    for second in 1..=seconds {
        while elapsed_us + clock_us <= u64::from(second) * progress_us {
            elapsed_us += clock_us;
            if let Err(e) = watch.on_tick(&mut frame) {
                match e {
                    lcd_stopwatch::RenderError::Port(never) => match never {},
                    lcd_stopwatch::RenderError::Format => {
                        eprintln!("number overflowed its field")
                    }
                }
            }
        }
        infallible(bar.on_tick(&mut frame));

        println!("{:>4}s  |{}|", second, frame.row_text(0));
        println!("        |{}|", frame.row_text(1));
    }
}
