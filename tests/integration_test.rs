use cn_idnum::{
    equivalent_id_numbers, extract_age, has_valid_length, is_legal_adult, is_male_by_sequence,
    is_valid_id_number, normalize_to_15, normalize_to_18, page_slice, Calendar,
};

struct FixedCalendar {
    year: i32,
    today: u32,
}

impl Calendar for FixedCalendar {
    fn current_year(&self) -> i32 {
        self.year
    }
    fn today_yyyymmdd(&self) -> u32 {
        self.today
    }
}

const CALENDAR: FixedCalendar = FixedCalendar {
    year: 2024,
    today: 20240601,
};

#[test]
fn legacy_number_end_to_end() {
    let legacy = "110101900101123";

    assert!(has_valid_length(legacy));
    assert_eq!(is_valid_id_number(legacy, -1, &CALENDAR), Ok(true));

    let canonical = normalize_to_18(legacy).unwrap().unwrap();
    assert_eq!(canonical, "110101199001011237");
    assert_eq!(normalize_to_15(&canonical), Some(legacy.to_string()));

    assert_eq!(equivalent_id_numbers(legacy, &canonical, &CALENDAR), Ok(true));
    assert_eq!(equivalent_id_numbers(&canonical, legacy, &CALENDAR), Ok(true));

    assert_eq!(extract_age(legacy, &CALENDAR), Ok(34));
    assert_eq!(extract_age(&canonical, &CALENDAR), Ok(34));
    assert!(is_legal_adult(legacy, &CALENDAR));
    // Same parity digit in both renderings
    assert_eq!(is_male_by_sequence(legacy), Ok(true));
    assert_eq!(is_male_by_sequence(&canonical), Ok(true));
}

#[test]
fn canonical_number_with_x_check_character() {
    let legacy = "110101900101143";
    let canonical = normalize_to_18(legacy).unwrap().unwrap();
    assert_eq!(canonical, "11010119900101143X");

    // The lowercase rendering is the same number
    let lowercase = canonical.to_lowercase();
    assert_eq!(is_valid_id_number(&lowercase, -1, &CALENDAR), Ok(true));
    assert_eq!(equivalent_id_numbers(legacy, &lowercase, &CALENDAR), Ok(true));
}

#[test]
fn rejects_garbage_inputs() {
    let garbage = vec!["", "   ", "not-an-id-number", "1101011990010112345"];
    for input in garbage {
        assert_eq!(is_valid_id_number(input, -1, &CALENDAR), Ok(false));
        assert_eq!(extract_age(input, &CALENDAR), Ok(0));
        assert!(!is_legal_adult(input, &CALENDAR));
    }
}

#[test]
fn minimum_age_gate() {
    // Born 2000-12-12
    let number = "513231200012121657";
    assert_eq!(is_valid_id_number(number, 18, &CALENDAR), Ok(true));
    assert_eq!(is_valid_id_number(number, 200, &CALENDAR), Ok(false));
}

#[test]
fn paginates_id_number_lists() {
    let numbers = vec![
        "513231200012121657",
        "513231200012121673",
        "51323120001212169X",
        "513231200012121710",
        "513231200012121737",
    ];
    assert_eq!(page_slice(&numbers, 1, 2), Ok(&numbers[0..2]));
    assert_eq!(page_slice(&numbers, 3, 2), Ok(&numbers[4..5]));
    assert!(page_slice(&numbers, 4, 2).is_err());
}
