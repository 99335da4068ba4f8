/// Numeric maximum of the two invoice numbers, zero-padded to `width`.
///
/// A meaningful maximum needs both operands, so any absent or non-numeric
/// input resolves to `None` instead of an error. Comparison is numeric, not
/// lexical: "10" beats "9". `width` is a floor, never a cap; values with more
/// digits print in full.
pub fn compare_max(inbound: Option<&str>, outbound: Option<&str>, width: usize) -> Option<String> {
    let (inbound, outbound) = (inbound?, outbound?);

    let inbound: u64 = match inbound.parse() {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!("inbound NFe number {:?} is not numeric: {}", inbound, e);
            return None;
        }
    };
    let outbound: u64 = match outbound.parse() {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!("outbound NFe number {:?} is not numeric: {}", outbound, e);
            return None;
        }
    };

    Some(format!("{:0width$}", inbound.max(outbound), width = width))
}
