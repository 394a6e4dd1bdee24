pub mod button_effect;
pub mod widgets;
