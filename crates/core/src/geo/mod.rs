mod merge;
mod requests;
mod types;

pub use merge::{merge_continent, merge_country};
pub use requests::{
    ContinentPatch, CountryPatch, CreateContinentRequest, CreateCountryRequest, Field,
};
pub use types::{Continent, Country};
