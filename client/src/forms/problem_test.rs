use super::*;

fn filled() -> ProblemForm {
    let mut form = ProblemForm {
        problem_name: " Two Sum ".to_owned(),
        description: "Find a pair.".to_owned(),
        difficulty: "Easy".to_owned(),
        submissions: "12".to_owned(),
        marks: "10".to_owned(),
        author: " gfg ".to_owned(),
        ..ProblemForm::default()
    };
    form.set_test_case(0, TestCaseField::Input, "2\n1 1".to_owned());
    form.set_test_case(0, TestCaseField::ExpectedOutput, "2".to_owned());
    form
}

#[test]
fn default_form_has_one_blank_test_case_and_zero_counts() {
    let form = ProblemForm::default();
    assert_eq!(form.hidden_test_cases, vec![TestCaseDraft::default()]);
    assert_eq!(form.submissions, "0");
    assert_eq!(form.marks, "0");
    assert!(form.difficulty.is_empty());
}

#[test]
fn add_and_edit_test_cases_by_index() {
    let mut form = ProblemForm::default();
    form.add_test_case();
    form.set_test_case(1, TestCaseField::ExpectedOutput, "42".to_owned());
    assert_eq!(form.hidden_test_cases.len(), 2);
    assert_eq!(form.hidden_test_cases[1].expected_output, "42");
    assert!(form.hidden_test_cases[0].expected_output.is_empty());
}

#[test]
fn set_test_case_out_of_range_is_ignored() {
    let mut form = ProblemForm::default();
    form.set_test_case(5, TestCaseField::Input, "x".to_owned());
    assert_eq!(form, ProblemForm::default());
}

#[test]
fn validate_builds_payload() {
    let payload = filled().validate().unwrap();
    assert_eq!(payload.problem_name, "Two Sum");
    assert_eq!(payload.difficulty, Difficulty::Easy);
    assert_eq!(payload.submissions, 12);
    assert_eq!(payload.marks, 10);
    assert_eq!(payload.author, "gfg");
    assert_eq!(
        payload.hidden_test_cases,
        vec![HiddenTestCase { input: "2\n1 1".to_owned(), expected_output: "2".to_owned() }]
    );
}

#[test]
fn payload_uses_wire_field_names() {
    let value = serde_json::to_value(filled().validate().unwrap()).unwrap();
    assert_eq!(value["problemName"], "Two Sum");
    assert_eq!(value["difficulty"], "Easy");
    assert_eq!(value["inputFormat"], "");
    assert_eq!(value["hiddenTestCases"][0]["expectedOutput"], "2");
}

#[test]
fn validate_requires_name_and_description() {
    let form = ProblemForm { problem_name: " ".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err(FormError::Required("Problem name")));
    let form = ProblemForm { description: String::new(), ..filled() };
    assert_eq!(form.validate(), Err(FormError::Required("Description")));
}

#[test]
fn validate_requires_known_difficulty() {
    let form = ProblemForm { difficulty: String::new(), ..filled() };
    assert_eq!(form.validate(), Err(FormError::MissingDifficulty));
    let form = ProblemForm { difficulty: "Insane".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err(FormError::MissingDifficulty));
}

#[test]
fn validate_rejects_negative_or_text_counts() {
    let form = ProblemForm { marks: "-1".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err(FormError::InvalidNumber("Marks")));
    let form = ProblemForm { submissions: "many".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err(FormError::InvalidNumber("Submissions")));
}

#[test]
fn blank_count_reads_as_zero() {
    let form = ProblemForm { marks: " ".to_owned(), ..filled() };
    assert_eq!(form.validate().unwrap().marks, 0);
}

#[test]
fn validate_drops_blank_rows_and_requires_an_expected_output() {
    let mut form = filled();
    form.add_test_case();
    assert_eq!(form.validate().unwrap().hidden_test_cases.len(), 1);

    let form = ProblemForm { hidden_test_cases: vec![TestCaseDraft::default()], ..filled() };
    assert_eq!(form.validate(), Err(FormError::NoTestCases));
}
