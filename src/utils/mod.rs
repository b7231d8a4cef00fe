pub mod format;

pub use format::{
    format_currency, format_long_date, format_number, format_short_currency, format_short_date,
};
