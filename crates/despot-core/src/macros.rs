#[macro_export]
macro_rules! attrs {
    () => {
        $crate::attr::Attributes::new()
    };
    (
        $( $key:expr => $value:expr ),+ $(,)?
    ) => {
        [ $( ($key, $crate::attr::Value::from($value)), )+ ]
            .into_iter()
            .collect::<$crate::attr::Attributes>()
    };
}
