use studyspace_core::SpaceCard;

pub struct TableFormatter {
    title_width: usize,
    subject_width: usize,
    venue_width: usize,
    time_width: usize,
    author_width: usize,
    members_width: usize,
    joined_width: usize,
}

impl TableFormatter {
    pub fn new(cards: &[SpaceCard]) -> Self {
        let title_width = cards
            .iter()
            .map(|c| c.heading.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(5, 40);

        Self {
            title_width,
            subject_width: 16,
            venue_width: 16,
            time_width: 20,
            author_width: 16,
            members_width: 7,
            joined_width: 6,
        }
    }

    pub fn print_table(&self, cards: &[SpaceCard]) {
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
        for card in cards {
            println!("{}", self.row(card));
        }
        println!("{}", self.bottom_border());
    }

    fn row(&self, card: &SpaceCard) -> String {
        self.format_row([
            &truncate(&card.heading, self.title_width),
            &truncate(&card.subject, self.subject_width),
            &truncate(&card.venue, self.venue_width),
            &truncate(&card.time, self.time_width),
            &truncate(&card.author, self.author_width),
            &truncate(&card.member_count.to_string(), self.members_width),
            &truncate(if card.joined { "yes" } else { "no" }, self.joined_width),
        ])
    }

    fn header_row(&self) -> String {
        self.format_row([
            &truncate("Title", self.title_width),
            &truncate("Subject", self.subject_width),
            &truncate("Venue", self.venue_width),
            &truncate("Time", self.time_width),
            &truncate("Author", self.author_width),
            &truncate("Members", self.members_width),
            &truncate("Joined", self.joined_width),
        ])
    }

    fn format_row(&self, cells: [&str; 7]) -> String {
        format!("│ {} │", cells.join(" │ "))
    }

    fn widths(&self) -> [usize; 7] {
        [
            self.title_width,
            self.subject_width,
            self.venue_width,
            self.time_width,
            self.author_width,
            self.members_width,
            self.joined_width,
        ]
    }

    fn border(&self, left: &str, middle: &str, right: &str) -> String {
        let segments: Vec<String> = self
            .widths()
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(middle), right)
    }

    fn top_border(&self) -> String {
        self.border("┌", "┬", "┐")
    }

    fn separator(&self) -> String {
        self.border("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.border("└", "┴", "┘")
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(heading: &str) -> SpaceCard {
        SpaceCard {
            id: "1".to_string(),
            heading: heading.to_string(),
            description: String::new(),
            subject: "Maths".to_string(),
            venue: "Library".to_string(),
            author: "ada".to_string(),
            date: "2024-03-01".to_string(),
            time: "09:00:00 to 11:00:00".to_string(),
            joined: false,
            member_count: 2,
        }
    }

    #[test]
    fn test_truncate_pads_short_strings() {
        assert_eq!(truncate("abc", 5), "abc  ");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("abcdefgh", 6), "abc...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_title_width_follows_longest_heading() {
        let formatter = TableFormatter::new(&[card("Linear algebra"), card("Chem")]);
        assert_eq!(formatter.title_width, 14);

        let empty = TableFormatter::new(&[]);
        assert_eq!(empty.title_width, 16);
    }

    #[test]
    fn test_rows_and_borders_have_equal_width() {
        let formatter = TableFormatter::new(&[card("Linear algebra")]);
        let width = |s: &str| s.chars().count();

        let top = formatter.top_border();
        assert_eq!(width(&formatter.header_row()), width(&top));
        assert_eq!(width(&formatter.row(&card("Linear algebra"))), width(&top));
        assert_eq!(width(&formatter.separator()), width(&top));
        assert_eq!(width(&formatter.bottom_border()), width(&top));
    }
}
