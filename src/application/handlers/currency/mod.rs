//! Currency query and command handlers.

mod convert_currency;
mod get_dolar_rate;
mod get_exchange_rates;
mod refresh_exchange_rates;

pub use convert_currency::{ConvertCurrencyHandler, ConvertCurrencyQuery};
pub use get_dolar_rate::GetDolarRateHandler;
pub use get_exchange_rates::GetExchangeRatesHandler;
pub use refresh_exchange_rates::RefreshExchangeRatesHandler;
