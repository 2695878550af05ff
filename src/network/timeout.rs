use crate::network::client::CommandErrors;
use embedded_time::duration::{Extensions, Microseconds};
use embedded_time::timer::param::{OneShot, Running};
use embedded_time::{Clock, Timer};

/// Deadline of a single request round trip.
/// Never expires if no clock is given or the duration is zero.
pub(crate) struct Deadline<'a, C: Clock> {
    timer: Option<Timer<'a, OneShot, Running, C, Microseconds>>,
}

impl<'a, C: Clock> Deadline<'a, C> {
    pub fn start(clock: Option<&'a C>, duration: Microseconds) -> Result<Self, CommandErrors> {
        let clock = match clock {
            Some(clock) if duration != 0.microseconds() => clock,
            _ => return Ok(Self { timer: None }),
        };

        let timer = clock
            .new_timer(duration)
            .start()
            .map_err(|_| CommandErrors::TimerError)?;

        Ok(Self { timer: Some(timer) })
    }

    pub fn expired(&self) -> Result<bool, CommandErrors> {
        match &self.timer {
            None => Ok(false),
            Some(timer) => timer.is_expired().map_err(|_| CommandErrors::TimerError),
        }
    }
}
