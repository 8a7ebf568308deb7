use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendations {
    pub do_list: Vec<String>,
    pub dont_list: Vec<String>,
    /// Which specialists to see and what to raise with them.
    pub specialist_notes: Vec<String>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.do_list.is_empty() && self.dont_list.is_empty() && self.specialist_notes.is_empty()
    }

    /// Append items, skipping any already present in the target list.
    pub fn extend_unique(&mut self, do_list: &[String], dont_list: &[String], specialist_notes: &[String]) {
        push_unique(&mut self.do_list, do_list);
        push_unique(&mut self.dont_list, dont_list);
        push_unique(&mut self.specialist_notes, specialist_notes);
    }
}

fn push_unique(target: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !target.contains(item) {
            target.push(item.clone());
        }
    }
}
