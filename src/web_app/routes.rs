// web_app/routes.rs - URL paths for the standard answer admin pages

pub const LIST_ROUTE: &str = "/admin/standard-answer";
pub const NEW_ROUTE: &str = "/admin/standard-answer/new";

/// Editor URL for an existing answer
pub fn edit_route(id: i32) -> String {
    format!("{}/{}", LIST_ROUTE, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_route() {
        assert_eq!(edit_route(17), "/admin/standard-answer/17");
    }

    #[test]
    fn test_new_route_is_under_list() {
        assert!(NEW_ROUTE.starts_with(LIST_ROUTE));
    }
}
