mod theme_handler;

pub use theme_handler::ThemeHandler;
