mod gemini;
mod google;
mod notify;
mod traits;

pub use gemini::MockTextService;
pub use google::{MockGoogleAuth, MockGoogleCalendar};
pub use notify::{ConsoleNotifier, NullNotifier};
pub use traits::{
    AuthProvider, CalendarEventRef, CalendarProvider, Notifier, QuestionClassification,
    TextService, UserProfile,
};
