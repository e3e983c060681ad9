//! Grouping hit objects into lanes.

use super::model::hit_object::HitObject;

/// Groups hit objects into `key_count` lanes.
///
/// Lane `i` holds every object whose [`HitObject::column`] is `i`, in the input order. Objects
/// with a column out of `0..key_count` are left out of every lane.
pub fn organize_notes_by_column(hit_objects: &[HitObject], key_count: u32) -> Vec<Vec<HitObject>> {
    let mut lanes = vec![vec![]; key_count as usize];
    for obj in hit_objects {
        let Ok(column) = usize::try_from(obj.column) else {
            continue;
        };
        if let Some(lane) = lanes.get_mut(column) {
            lane.push(obj.clone());
        }
    }
    lanes
}
