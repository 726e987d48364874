use crate::constraints;
use crate::entities::{Instance, Solution};
use crate::util::PlateConfig;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of solutions
//Used in debug_assert!() blocks and tests

/// No two parts on the same plate overlap once the buffer is taken into account.
pub fn solution_is_overlap_free(solution: &Solution, buffer: u32) -> bool {
    for (p_idx, plate) in solution.plates.iter().enumerate() {
        for (a, b) in plate.parts.iter().tuple_combinations() {
            if constraints::overlaps(a, b, buffer) {
                error!(
                    "parts of item {} and item {} overlap on plate {p_idx}: {:?} vs {:?}",
                    a.item_id, b.item_id, a.footprint, b.footprint
                );
                return false;
            }
        }
    }
    true
}

/// All parts on one plate belong to the time bucket of the first part.
pub fn plates_are_single_bucket(solution: &Solution) -> bool {
    solution.plates.iter().all(|plate| match plate.first() {
        None => true,
        Some(first) => plate
            .parts
            .iter()
            .all(|p| constraints::compatible(&first.order_time, &p.order_time)),
    })
}

/// Every part keeps the required clearance to the plate edges.
pub fn parts_inside_plates(solution: &Solution, config: &PlateConfig) -> bool {
    solution
        .plates
        .iter()
        .flat_map(|plate| plate.parts.iter())
        .all(|p| p.footprint.inside_plate(config.plate_size, config.buffer))
}

/// The number of placed units of every item matches its ordered quantity.
pub fn quantities_conserved(instance: &Instance, solution: &Solution) -> bool {
    let mut placed = vec![0; instance.items().len()];
    for part in solution.plates.iter().flat_map(|plate| plate.parts.iter()) {
        placed[part.item_id] += 1;
    }
    instance
        .items()
        .iter()
        .all(|item| placed[item.id] == item.quantity)
}

/// No plate of the solution is empty.
pub fn no_empty_plates(solution: &Solution) -> bool {
    solution.plates.iter().all(|plate| !plate.is_empty())
}
