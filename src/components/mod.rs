pub mod search_bar;
pub mod weather_card;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_card::{WeatherCard, WeatherCardProps};
pub use weather_display::{
    WeatherDisplay, WeatherDisplayProps, LOADING_MESSAGE, NOT_FOUND_MESSAGE,
};
