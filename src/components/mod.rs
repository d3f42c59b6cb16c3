pub mod button;
pub mod card;
pub mod icons;
pub mod navbar;
pub mod providers;
pub mod section;
