use super::*;

#[test]
fn test_check_code_display() {
    assert_eq!(
        CheckCode::UnnecessaryValueParam.to_string(),
        "performance-unnecessary-value-param"
    );
    assert_eq!(
        format!("{}", CheckCode::DeleteNullPointer),
        "readability-delete-null-pointer"
    );
}

#[test]
fn test_from_name_round_trips() {
    for code in CheckCode::ALL {
        assert_eq!(CheckCode::from_name(code.as_str()), Some(code));
    }
    assert_eq!(CheckCode::from_name("performance-nonexistent"), None);
}

#[test]
fn test_category() {
    assert_eq!(CheckCode::UnnecessaryValueParam.category(), "performance");
    assert_eq!(CheckCode::DeleteNullPointer.category(), "readability");
}
