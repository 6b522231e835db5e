use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::core::models::roster::Roster;
use crate::core::models::user::User;
use crate::core::traits::table_view::TableView;

/// Renders roster state with comfy-table.
pub struct ComfyTableView;

impl ComfyTableView {
    fn table(header: Vec<&str>) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(header);
        table
    }
}

impl TableView for ComfyTableView {
    fn users(&self, roster: &Roster) -> String {
        let mut table = Self::table(vec!["Username", "Email", "Keys"]);
        for (user, summaries) in roster.overview() {
            if summaries.is_empty() {
                table.add_row(vec![user.name.as_str(), user.email.as_str(), "No keys"]);
                continue;
            }
            for (i, summary) in summaries.iter().enumerate() {
                if i == 0 {
                    table.add_row(vec![user.name.as_str(), user.email.as_str(), summary.as_str()]);
                } else {
                    table.add_row(vec!["-", "-", summary.as_str()]);
                }
            }
        }
        table.to_string()
    }

    fn keys(&self, user: &User) -> String {
        let mut table = Self::table(vec!["#", "Type", "Key", "Hostname"]);
        for (i, key) in user.keys.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                key.key_type.clone(),
                key.key.clone(),
                key.hostname.clone(),
            ]);
        }
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_table_marks_keyless_users() {
        let mut roster = Roster::default();
        roster.add_user("Alice", "a@x.com", vec![]);
        let rendered = ComfyTableView.users(&roster);
        assert!(rendered.contains("Alice"));
        assert!(rendered.contains("No keys"));
    }

    #[test]
    fn user_table_truncates_key_material() {
        let mut roster = Roster::default();
        roster.add_user("Alice", "a@x.com", vec![]);
        roster.add_key("a@x.com", "ssh-rsa ABCDEFGHIJ laptop");
        let rendered = ComfyTableView.users(&roster);
        assert!(rendered.contains("ssh-rsa ABCDE..."));
        assert!(!rendered.contains("ABCDEFGHIJ"));
    }

    #[test]
    fn key_table_is_one_based_and_untruncated() {
        let mut roster = Roster::default();
        roster.add_user("Alice", "a@x.com", vec![]);
        roster.add_key("a@x.com", "ssh-rsa ABCDEFGHIJ laptop");
        let user = roster.find_user("a@x.com").unwrap();
        let rendered = ComfyTableView.keys(user);
        assert!(rendered.contains('1'));
        assert!(rendered.contains("ABCDEFGHIJ"));
        assert!(rendered.contains("laptop"));
    }
}
