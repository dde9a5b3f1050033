mod clock;
mod countdown;
mod elapsed;
mod pomodoro;
mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use countdown::{Countdown, CountdownSnapshot};
pub use elapsed::{ElapsedTimer, TimerSnapshot};
pub use pomodoro::{PomodoroCycle, PomodoroMode};
pub use stopwatch::Stopwatch;
