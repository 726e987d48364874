use crate::Result;
use crate::entities::{Instance, Solution};
use crate::io::TIME_FORMAT;
use crate::io::ext_repr::{ExtPlacedPart, ExtPlate, ExtSolution};
use crate::util::PlateConfig;
use std::borrow::Cow;
use std::io::Write;

/// Exports a solution out of the library
pub fn export(instance: &Instance, solution: &Solution, config: &PlateConfig) -> ExtSolution {
    let plates = solution
        .plates
        .iter()
        .enumerate()
        .map(|(i, plate)| ExtPlate {
            plate_number: i + 1,
            parts: plate
                .parts
                .iter()
                .map(|part| ExtPlacedPart {
                    part_name: instance.item(part.item_id).name.clone(),
                    order_time: part.order_time.strftime(TIME_FORMAT).to_string(),
                    x_position: part.x(),
                    y_position: part.y(),
                })
                .collect(),
        })
        .collect();

    ExtSolution {
        cost: solution.cost(config),
        utilization: solution.utilization(config).ok(),
        plates,
    }
}

/// Writes one row per placed part, grouped by plate in solution order.
pub fn write_csv(solution: &ExtSolution, mut writer: impl Write) -> Result<()> {
    writeln!(
        writer,
        "plate_number,part_name,order_time,x_position,y_position"
    )?;
    for plate in &solution.plates {
        for part in &plate.parts {
            writeln!(
                writer,
                "{},{},{},{},{}",
                plate.plate_number,
                escape_field(&part.part_name),
                part.order_time,
                part.x_position,
                part.y_position
            )?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn escape_field(field: &str) -> Cow<'_, str> {
    match field.contains([',', '"', '\n']) {
        true => Cow::Owned(format!("\"{}\"", field.replace('"', "\"\""))),
        false => Cow::Borrowed(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Item, PlacedPart, Plate};
    use jiff::civil::date;

    #[test]
    fn csv_rows_follow_solution_order() {
        let t = date(2024, 1, 1).at(8, 0, 0, 0);
        let items = vec![
            Item::new(0, "plain".to_string(), [100, 100, 10], 1, t),
            Item::new(1, "with, comma".to_string(), [50, 60, 10], 1, t),
        ];
        let instance = Instance::new(items.clone());
        let solution = Solution::new(vec![
            Plate::new(vec![PlacedPart::new(&items[0], 5, 5)]),
            Plate::new(vec![PlacedPart::new(&items[1], 5, 5)]),
        ]);

        let ext = export(&instance, &solution, &PlateConfig::default());
        assert_eq!(ext.plates.len(), 2);
        assert_eq!(ext.cost, 2 * 250_000 - 2);

        let mut buffer = vec![];
        write_csv(&ext, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines = csv.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            [
                "plate_number,part_name,order_time,x_position,y_position",
                "1,plain,2024-01-01 08:00:00,5,5",
                "2,\"with, comma\",2024-01-01 08:00:00,5,5",
            ]
        );
    }

    #[test]
    fn escaped_names_survive_reimport() {
        let name = "12\" pipe, \"long\"";
        let row = format!("{},10x20x5,1,2024-01-01 08:00:00", escape_field(name));
        let order = crate::io::parse_order(1, &row).unwrap();
        assert_eq!(order.name, name);
    }
}
