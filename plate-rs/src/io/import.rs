use crate::entities::{Instance, Item};
use crate::io::TIME_FORMAT;
use crate::io::ext_repr::ExtOrder;
use crate::util::PlateConfig;
use crate::{PlateError, Result};
use itertools::Itertools;
use jiff::civil::DateTime;
use log::debug;
use std::borrow::Cow;
use std::io::BufRead;

/// Parses a single `name, dimensions, quantity, order_time` row.
/// `line` is the 1-based row number, used in the error.
pub fn parse_order(line: usize, row: &str) -> Result<ExtOrder> {
    let err = |reason: String| PlateError::Parse { line, reason };

    //the name is the only field that may contain commas
    let fields = row.rsplitn(4, ',').collect_vec();
    let [order_time, quantity, dimensions, name] = fields[..] else {
        return Err(err(format!("expected 4 fields, found {}", fields.len())));
    };
    let (order_time, quantity, dimensions) = (
        clean_field(order_time),
        clean_field(quantity),
        clean_field(dimensions),
    );
    let name = unquote(name);

    if name.is_empty() {
        return Err(err("empty part name".to_string()));
    }

    let dimensions = parse_dimensions(dimensions).map_err(err)?;

    let quantity = quantity
        .parse::<usize>()
        .map_err(|e| err(format!("invalid quantity {quantity:?}: {e}")))?;

    let order_time = DateTime::strptime(TIME_FORMAT, order_time)
        .map_err(|e| err(format!("invalid order time {order_time:?}: {e}")))?;

    Ok(ExtOrder {
        name: name.into_owned(),
        dimensions,
        quantity,
        order_time,
    })
}

fn clean_field(field: &str) -> &str {
    field.trim().trim_matches('"').trim()
}

/// Strips the surrounding quotes of a quoted field and turns every `""` inside it into `"`
fn unquote(field: &str) -> Cow<'_, str> {
    let field = field.trim();
    match field.strip_prefix('"').and_then(|f| f.strip_suffix('"')) {
        Some(inner) => Cow::Owned(inner.trim().replace("\"\"", "\"")),
        None => Cow::Borrowed(field),
    }
}

fn parse_dimensions(dimensions: &str) -> std::result::Result<[u32; 3], String> {
    let parsed = dimensions
        .split('x')
        .map(|d| d.trim().parse::<u32>())
        .collect::<std::result::Result<Vec<u32>, _>>()
        .map_err(|e| format!("invalid dimensions {dimensions:?}: {e}"))?;

    match parsed[..] {
        [d0, d1, d2] if d0 > 0 && d1 > 0 => Ok([d0, d1, d2]),
        [_, _, _] => Err(format!("dimensions {dimensions:?} must have a non-zero footprint")),
        _ => Err(format!(
            "dimensions {dimensions:?} should have the form <int>x<int>x<int>"
        )),
    }
}

/// Reads all orders from a headerless, comma separated order list. Blank lines are skipped.
pub fn read_orders(reader: impl BufRead) -> Result<Vec<ExtOrder>> {
    let mut orders = vec![];
    for (i, bytes) in reader.split(b'\n').enumerate() {
        let line = i + 1;
        let row = String::from_utf8(bytes?).map_err(|e| PlateError::Parse {
            line,
            reason: format!("row is not valid UTF-8: {e}"),
        })?;
        if row.trim().is_empty() {
            continue;
        }
        orders.push(parse_order(line, &row)?);
    }
    debug!("[IO] read {} orders", orders.len());
    Ok(orders)
}

/// Imports the orders into an [`Instance`]: items are sorted by order time (stable)
/// and verified to fit on an empty plate.
pub fn import(orders: &[ExtOrder], config: &PlateConfig) -> Result<Instance> {
    let items = orders
        .iter()
        .sorted_by_key(|o| o.order_time)
        .enumerate()
        .map(|(id, o)| Item::new(id, o.name.clone(), o.dimensions, o.quantity, o.order_time))
        .collect_vec();

    let instance = Instance::new(items);
    instance.validate(config)?;
    Ok(instance)
}
