//! Built-in translation steps, in dispatch order.

mod declarations;
mod expressions;
mod literals;
mod statements;
mod types;

pub use declarations::DeclarationStep;
pub use expressions::ExpressionStep;
pub use literals::LiteralStep;
pub use statements::StatementStep;
pub use types::TypeStep;

use crate::step::TranslationStep;

pub fn default_steps() -> Vec<Box<dyn TranslationStep>> {
    vec![
        Box::new(LiteralStep),
        Box::new(ExpressionStep),
        Box::new(StatementStep),
        Box::new(TypeStep),
        Box::new(DeclarationStep),
    ]
}
