pub mod sink;
pub mod hipchat;
pub mod log;
pub mod flavor;
pub mod formatter;
pub mod dispatcher;

pub use sink::{MessageColor, MessageFormat, NotificationSink, OutboundMessage};
pub use hipchat::HipChatSink;
pub use log::LogSink;
pub use flavor::{FixedFlavor, FlavorCatalog, FlavorText, RandomFlavor};
pub use formatter::MessageFormatter;
pub use dispatcher::Dispatcher;
