pub mod metrics;
pub mod prompt;
pub mod providers;
pub mod suggestion;

pub use metrics::{get_metrics, init_metrics};
pub use providers::{
    FailingTextProvider, GeminiTextProvider, MockTextProvider, ProviderError, TextProvider,
};
pub use suggestion::SuggestionService;
