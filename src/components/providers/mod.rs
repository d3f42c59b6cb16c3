pub mod navigator;

pub use navigator::{Navigator, NavigatorProvider};

use yew::{Component, Context};

pub trait Provider<T>: Component {
    /// Returns the context `T` provided by the closest parent provider.
    ///
    /// # Panics
    ///
    /// Panics if `C` is not rendered inside the provider.
    fn get<C>(ctx: &Context<C>) -> T
    where
        C: Component;
}
