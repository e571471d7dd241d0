//! # Static gym catalog
//!
//! Read-only reference data shown by every page: the class timetable, the
//! coaching staff and the membership plans. Nothing in the catalog changes at
//! runtime, so all lookups borrow `'static` data.
//!
//! | Item | Key | References |
//! |------|-----|------------|
//! | [`Class`] | `id` (`"c1"`…) | `trainer_id` → [`Trainer::id`] |
//! | [`Trainer`] | `id` (`"t1"`…) | |
//! | [`MembershipPlan`] | `id` (`"basic"`, `"plus"`, `"premium"`) | |
//!
//! Filter helpers treat `"Any"`, `"All"` and the empty string as "no
//! constraint", matching the options offered by the select boxes.

/// A scheduled class on the weekly timetable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Class {
    pub id: &'static str,
    pub title: &'static str,
    pub level: &'static str,
    pub trainer_id: &'static str,
    pub day: &'static str,
    pub time: &'static str,
    pub spots: u32,
    pub category: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trainer {
    pub id: &'static str,
    pub name: &'static str,
    pub focus: &'static str,
    pub bio: &'static str,
}

/// A purchasable membership tier.
#[derive(Clone, Debug, PartialEq)]
pub struct MembershipPlan {
    pub id: &'static str,
    pub name: &'static str,
    /// Monthly price in pounds.
    pub price: f64,
    pub perks: &'static [&'static str],
    /// CSS modifier used to tint the plan card.
    pub tier: &'static str,
}

pub const PLANS: &[MembershipPlan] = &[
    MembershipPlan {
        id: "basic",
        name: "Basic",
        price: 19.99,
        perks: &["Gym Access", "Locker"],
        tier: "basic",
    },
    MembershipPlan {
        id: "plus",
        name: "Plus",
        price: 34.99,
        perks: &["Gym + Classes", "Sauna"],
        tier: "plus",
    },
    MembershipPlan {
        id: "premium",
        name: "Premium",
        price: 54.99,
        perks: &["All Access", "PT Discounts", "Priority Booking"],
        tier: "premium",
    },
];

pub const TRAINERS: &[Trainer] = &[
    Trainer {
        id: "t1",
        name: "Ava Walker",
        focus: "Strength",
        bio: "5+ yrs coaching powerlifting and functional training.",
    },
    Trainer {
        id: "t2",
        name: "Diego Patel",
        focus: "Cardio",
        bio: "HIIT specialist with running programs for all levels.",
    },
    Trainer {
        id: "t3",
        name: "Maya Chen",
        focus: "Mobility",
        bio: "Mobility & yoga sequencing for active recovery.",
    },
];

pub const CLASSES: &[Class] = &[
    Class {
        id: "c1",
        title: "HIIT Express",
        level: "All",
        trainer_id: "t2",
        day: "Mon",
        time: "18:00",
        spots: 14,
        category: "Cardio",
    },
    Class {
        id: "c2",
        title: "Strength 101",
        level: "Begin",
        trainer_id: "t1",
        day: "Tue",
        time: "17:00",
        spots: 12,
        category: "Strength",
    },
    Class {
        id: "c3",
        title: "Mobility Flow",
        level: "All",
        trainer_id: "t3",
        day: "Wed",
        time: "19:00",
        spots: 10,
        category: "Mobility",
    },
    Class {
        id: "c4",
        title: "Spin Power",
        level: "All",
        trainer_id: "t2",
        day: "Thu",
        time: "18:30",
        spots: 16,
        category: "Cardio",
    },
    Class {
        id: "c5",
        title: "Barbell Basics",
        level: "Begin",
        trainer_id: "t1",
        day: "Fri",
        time: "17:30",
        spots: 10,
        category: "Strength",
    },
];

/// Name shown when a class references a trainer that is not in the catalog.
pub const UNKNOWN_TRAINER: &str = "Trainer";

pub fn find_class(id: &str) -> Option<&'static Class> {
    CLASSES.iter().find(|c| c.id == id)
}

pub fn find_trainer(id: &str) -> Option<&'static Trainer> {
    TRAINERS.iter().find(|t| t.id == id)
}

pub fn find_plan(id: &str) -> Option<&'static MembershipPlan> {
    PLANS.iter().find(|p| p.id == id)
}

/// Display name of a trainer, falling back to [`UNKNOWN_TRAINER`].
pub fn trainer_name(id: &str) -> &'static str {
    find_trainer(id).map_or(UNKNOWN_TRAINER, |t| t.name)
}

/// Format a monthly price: `19.99` → `"£19.99"`.
pub fn format_money(price: f64) -> String {
    format!("£{price:.2}")
}

/// Optional constraints applied by [`filter_classes`].
///
/// Each field left as `None` (or set to a wildcard) matches every class.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassFilter {
    pub category: Option<String>,
    pub day: Option<String>,
    pub search: Option<String>,
}

impl ClassFilter {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn matches(&self, class: &Class) -> bool {
        let category_ok = active(&self.category).map_or(true, |c| class.category == c);
        let day_ok = active(&self.day).map_or(true, |d| class.day == d);
        let search_ok = active(&self.search).map_or(true, |q| {
            class.title.to_lowercase().contains(&q.to_lowercase())
        });
        category_ok && day_ok && search_ok
    }
}

/// Returns the constraint value unless it is a wildcard.
fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !is_wildcard(v))
}

/// `"Any"`, `"All"` and blank values place no constraint on a filter.
pub fn is_wildcard(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("any") || value.eq_ignore_ascii_case("all")
}

/// Classes matching every active constraint, in timetable order.
pub fn filter_classes(filter: &ClassFilter) -> Vec<&'static Class> {
    CLASSES.iter().filter(|c| filter.matches(c)).collect()
}

/// First class matching the home page quick-book form.
pub fn quick_match(category: &str, day: &str) -> Option<&'static Class> {
    let filter = ClassFilter::default().category(category).day(day);
    CLASSES.iter().find(|c| filter.matches(c))
}

/// Distinct class categories in timetable order.
pub fn categories() -> Vec<&'static str> {
    distinct(CLASSES.iter().map(|c| c.category))
}

/// Distinct class days in timetable order.
pub fn days() -> Vec<&'static str> {
    distinct(CLASSES.iter().map(|c| c.day))
}

fn distinct(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for v in values {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen
}

impl Class {
    pub fn trainer_name(&self) -> &'static str {
        trainer_name(self.trainer_id)
    }

    /// `"Mon 18:00"`
    pub fn schedule(&self) -> String {
        format!("{} {}", self.day, self.time)
    }

    /// Multi-line summary for the class details dialog.
    pub fn details(&self) -> Vec<String> {
        vec![
            self.title.to_string(),
            self.schedule(),
            format!("Coach: {}", self.trainer_name()),
            format!("Level: {}", self.level),
            format!("Spots: {}", self.spots),
        ]
    }
}

impl MembershipPlan {
    /// `"£19.99/mo"`
    pub fn price_label(&self) -> String {
        format!("{}/mo", format_money(self.price))
    }

    /// Multi-line summary for the plan details dialog.
    pub fn details(&self) -> Vec<String> {
        let mut lines = vec![self.name.to_string(), self.price_label(), "Perks:".to_string()];
        lines.extend(self.perks.iter().map(|p| format!("- {p}")));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        assert_eq!(find_class("c3").unwrap().title, "Mobility Flow");
        assert_eq!(find_trainer("t2").unwrap().name, "Diego Patel");
        assert_eq!(find_plan("premium").unwrap().price, 54.99);

        assert!(find_class("c99").is_none());
        assert!(find_trainer("").is_none());
        assert!(find_plan("gold").is_none());
    }

    #[test]
    fn test_every_class_references_a_trainer() {
        for class in CLASSES {
            assert!(find_trainer(class.trainer_id).is_some(), "{}", class.id);
        }
        assert_eq!(trainer_name("t404"), UNKNOWN_TRAINER);
    }

    #[test]
    fn test_filter_by_category_and_day() {
        let cardio = filter_classes(&ClassFilter::default().category("Cardio"));
        let ids: Vec<_> = cardio.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["c1", "c4"]);

        let thursday_cardio =
            filter_classes(&ClassFilter::default().category("Cardio").day("Thu"));
        assert_eq!(thursday_cardio.len(), 1);
        assert_eq!(thursday_cardio[0].id, "c4");

        let none = filter_classes(&ClassFilter::default().category("Mobility").day("Mon"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_wildcards_match_everything() {
        assert_eq!(filter_classes(&ClassFilter::default()).len(), CLASSES.len());
        let any = ClassFilter::default().category("Any").day("Any").search("");
        assert_eq!(filter_classes(&any).len(), CLASSES.len());
        let all = ClassFilter::default().category("All");
        assert_eq!(filter_classes(&all).len(), CLASSES.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let hits = filter_classes(&ClassFilter::default().search("hiit"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c1");

        let hits = filter_classes(&ClassFilter::default().search("BAS"));
        assert_eq!(hits[0].id, "c5");

        let hits = filter_classes(&ClassFilter::default().category("Cardio").search("strength"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_quick_match_returns_first_hit() {
        assert_eq!(quick_match("Strength", "Any").unwrap().id, "c2");
        assert_eq!(quick_match("Any", "Fri").unwrap().id, "c5");
        assert_eq!(quick_match("Any", "Any").unwrap().id, "c1");
        assert!(quick_match("Cardio", "Wed").is_none());
    }

    #[test]
    fn test_distinct_values_keep_order() {
        assert_eq!(categories(), vec!["Cardio", "Strength", "Mobility"]);
        assert_eq!(days(), vec!["Mon", "Tue", "Wed", "Thu", "Fri"]);
    }

    #[test]
    fn test_money_and_details() {
        assert_eq!(format_money(19.99), "£19.99");
        assert_eq!(format_money(5.0), "£5.00");
        assert_eq!(find_plan("basic").unwrap().price_label(), "£19.99/mo");

        let details = find_class("c1").unwrap().details();
        assert_eq!(details[1], "Mon 18:00");
        assert_eq!(details[2], "Coach: Diego Patel");

        let plan = find_plan("plus").unwrap().details();
        assert_eq!(plan.last().unwrap(), "- Sauna");
    }
}
