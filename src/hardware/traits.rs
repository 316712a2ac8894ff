pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
}

#[allow(async_fn_in_trait)]
pub trait Button {
    /// Resolves on the next press (falling edge). Releases are ignored.
    async fn wait_for_press(&mut self);
}
