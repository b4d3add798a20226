use super::*;

#[test]
fn unsorted_headers_have_base_class() {
    let list = ProblemListView::default();
    for column in SortKey::COLUMNS {
        assert_eq!(header_class(&list, column), "problem-table__head");
    }
}

#[test]
fn active_header_carries_direction() {
    let mut list = ProblemListView::default();
    list.request_sort(SortKey::Marks);
    assert_eq!(header_class(&list, SortKey::Marks), "problem-table__head problem-table__head--ascending");
    assert_eq!(header_class(&list, SortKey::Submissions), "problem-table__head");

    list.request_sort(SortKey::Marks);
    assert_eq!(header_class(&list, SortKey::Marks), "problem-table__head problem-table__head--descending");
}
