use crate::models::policy::{DutyPolicy, PolicyPreset};
use crate::ui::messages;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};

pub struct PolicyLogic;

impl PolicyLogic {
    pub fn print(policy: &DutyPolicy) {
        messages::header(format!("Effective policy ({})", policy.preset.code()));

        let mut table = Table::new(vec![
            Column {
                header: "Rule".into(),
                width: 26,
            },
            Column {
                header: "Value".into(),
                width: 12,
            },
        ]);

        let hm = |t: chrono::NaiveTime| t.format("%H:%M").to_string();

        table.add_row(vec![
            "Lunch window".into(),
            format!("{}-{}", hm(policy.lunch_start), hm(policy.lunch_end)),
        ]);
        table.add_row(vec!["Flexible start".into(), hm(policy.flex_start)]);
        table.add_row(vec!["Flexible latest".into(), hm(policy.flex_latest)]);
        table.add_row(vec![
            "Latest start with leave".into(),
            hm(policy.latest_start(true)),
        ]);
        table.add_row(vec![
            "Duty window length".into(),
            mins2readable(policy.duty_length_minutes, false, false),
        ]);
        table.add_row(vec![
            "Required duty".into(),
            format!("{:.0} min", policy.required_minutes),
        ]);
        table.add_row(vec![
            "Tolerance".into(),
            format!("{} min", policy.tolerance_minutes),
        ]);

        print!("{}", table.render());
        println!();

        println!("Available presets:");
        for preset in PolicyPreset::ALL {
            let marker = if preset == policy.preset { "*" } else { " " };
            println!(" {} {:<14} {}", marker, preset.code(), preset.description());
        }
    }
}
