use fugit::MicrosDurationU32;
use lcd_stopwatch::TickSource;
use rp_pico::hal::timer::{Alarm, ScheduleAlarmError};

/// Periodic tick source over a one-shot RP2040 timer alarm.
///
/// The alarm fires once per schedule, so the bound handler must call
/// [`PeriodicAlarm::acknowledge`] on every interrupt to keep it running.
pub struct PeriodicAlarm<A> {
    alarm: A,
    period: MicrosDurationU32,
}

impl<A: Alarm> PeriodicAlarm<A> {
    pub fn new(alarm: A) -> Self {
        Self {
            alarm,
            period: MicrosDurationU32::from_ticks(0),
        }
    }

    /// Clear the pending interrupt and schedule the next one a period out.
    pub fn acknowledge(&mut self) -> Result<(), ScheduleAlarmError> {
        self.alarm.clear_interrupt();
        self.alarm.schedule(self.period)
    }
}

impl<A: Alarm> TickSource for PeriodicAlarm<A> {
    type Error = ScheduleAlarmError;

    fn configure(&mut self, period: MicrosDurationU32) {
        self.period = period;
    }

    fn enable(&mut self) -> Result<(), ScheduleAlarmError> {
        self.alarm.schedule(self.period)?;
        self.alarm.enable_interrupt();
        Ok(())
    }
}
