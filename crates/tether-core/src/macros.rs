/// Builds a [`Record`](crate::Record) from `field => value` pairs.
///
/// ```
/// use tether_core::{record, Value};
///
/// let record = record! { "id" => 1, "name" => "alice" };
/// assert_eq!(record.id(), &Value::I64(1));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    (
        $( $field:literal => $value:expr ),+ $(,)?
    ) => {{
        let mut record = $crate::Record::new();
        $( record.set($field, $value); )+
        record
    }};
}
