/// Avatar initials: first letter of each of the first two words.
///
/// Works on `char`s, so Cyrillic names are handled ("Иванов Петр" → "ИП").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Case counter with the singular form for exactly one case.
pub fn case_count_label(count: u32) -> String {
    if count == 1 {
        format!("{count} дело")
    } else {
        format!("{count} дела")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Иванов Петр"), "ИП");
        assert_eq!(initials("Иванов Петр Сергеевич"), "ИП");
        assert_eq!(initials("Александр Соколов"), "АС");
    }

    #[test]
    fn initials_of_quoted_company_name() {
        assert_eq!(initials("ООО \"Альфа\""), "О\"");
    }

    #[test]
    fn initials_edge_cases() {
        assert_eq!(initials("Петров"), "П");
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
        assert_eq!(initials("  Смирнова   Анна "), "СА");
    }

    #[test]
    fn singular_only_for_one() {
        assert_eq!(case_count_label(1), "1 дело");
        assert_eq!(case_count_label(2), "2 дела");
        assert_eq!(case_count_label(3), "3 дела");
        assert_eq!(case_count_label(0), "0 дела");
        assert_eq!(case_count_label(11), "11 дела");
    }
}
