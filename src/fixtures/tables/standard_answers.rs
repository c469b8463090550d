// fixtures/tables/standard_answers.rs
//
// Standard answers, their categories and the join table between them.

use crate::fixtures::TestTable;

pub struct StandardAnswersTable;

impl TestTable for StandardAnswersTable {
    fn setup_sql(schema: &str) -> Vec<String> {
        vec![
            format!("CREATE SCHEMA IF NOT EXISTS {schema}"),
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS {schema}.standard_answer_category (
                    id SERIAL PRIMARY KEY,
                    name VARCHAR(255) NOT NULL UNIQUE
                )
                "#
            ),
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS {schema}.standard_answer (
                    id SERIAL PRIMARY KEY,
                    keyword TEXT NOT NULL UNIQUE,
                    answer TEXT NOT NULL
                )
                "#
            ),
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS {schema}.standard_answer__standard_answer_category (
                    standard_answer_id INT NOT NULL
                        REFERENCES {schema}.standard_answer(id) ON DELETE CASCADE,
                    standard_answer_category_id INT NOT NULL
                        REFERENCES {schema}.standard_answer_category(id) ON DELETE CASCADE,
                    PRIMARY KEY (standard_answer_id, standard_answer_category_id)
                )
                "#
            ),
        ]
    }
}
