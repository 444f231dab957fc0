//! Dialect-cleaning rewrite rules.
//!
//! Each rule is a single (pattern, replacement) rewrite exposed as its own
//! function; [`clean_statement`] applies them in a fixed order. The order
//! matters for correctness: identifiers must be re-quoted before the inline
//! `KEY` rule looks for double-quoted names.

use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_CLAUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*COMMENT\s+'[^']*'").unwrap());
static ENGINE_CLAUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*ENGINE\s*=\s*\w+").unwrap());
static NUMERIC_QUALIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+(?:unsigned|zerofill)\b").unwrap());
static DISPLAY_WIDTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(tinyint|smallint|mediumint|int|integer|bigint)\s*\(\s*\d+\s*\)").unwrap()
});
static INLINE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i),\s*(?:UNIQUE\s+)?KEY\s+"[^"]+"\s*\([^)]*\)"#).unwrap());

/// Strips inline column `COMMENT '...'` clauses.
pub fn strip_comment_clauses(sql: &str) -> String {
    COMMENT_CLAUSE.replace_all(sql, "").into_owned()
}

/// Strips storage-engine clauses such as `ENGINE=InnoDB`.
pub fn strip_engine_clauses(sql: &str) -> String {
    ENGINE_CLAUSE.replace_all(sql, "").into_owned()
}

/// Converts backtick-quoted identifiers to double-quote quoting.
pub fn quote_identifiers(sql: &str) -> String {
    sql.replace('`', "\"")
}

/// Strips `unsigned`/`zerofill` qualifiers and integer display widths
/// (`int(11)` becomes `int`).
pub fn strip_numeric_qualifiers(sql: &str) -> String {
    let without_qualifiers = NUMERIC_QUALIFIER.replace_all(sql, "");
    DISPLAY_WIDTH.replace_all(&without_qualifiers, "$1").into_owned()
}

/// Drops inline secondary-index definitions (`KEY "x" ("y")`), which only
/// MySQL accepts inside `CREATE TABLE`. Runs after [`quote_identifiers`].
pub fn strip_inline_keys(sql: &str) -> String {
    INLINE_KEY.replace_all(sql, "").into_owned()
}

/// Rewrites one statement from the dump's MySQL dialect into portable SQL.
pub fn clean_statement(sql: &str) -> String {
    let sql = strip_comment_clauses(sql);
    let sql = strip_engine_clauses(&sql);
    let sql = quote_identifiers(&sql);
    let sql = strip_numeric_qualifiers(&sql);
    let sql = strip_inline_keys(&sql);
    sql.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comment_clauses() {
        let sql = "code char(2) NOT NULL COMMENT 'Country code', name varchar(255)";
        let cleaned = strip_comment_clauses(sql);

        assert!(!cleaned.contains("COMMENT"));
        assert!(cleaned.contains("code char(2) NOT NULL,"));
    }

    #[test]
    fn test_strip_engine_clauses() {
        assert_eq!(strip_engine_clauses(") ENGINE=InnoDB"), ")");
        assert_eq!(strip_engine_clauses(") ENGINE = MyISAM"), ")");
    }

    #[test]
    fn test_quote_identifiers() {
        assert_eq!(
            quote_identifiers("INSERT INTO `continents` VALUES"),
            "INSERT INTO \"continents\" VALUES"
        );
    }

    #[test]
    fn test_strip_numeric_qualifiers() {
        let cleaned = strip_numeric_qualifiers("number int(11) unsigned zerofill NOT NULL");
        assert_eq!(cleaned, "number int NOT NULL");
    }

    #[test]
    fn test_strip_inline_keys() {
        let sql = r#"(code char(2), name varchar(255), KEY "idx_name" ("name"))"#;
        let cleaned = strip_inline_keys(sql);

        assert!(!cleaned.contains("KEY"));
        assert!(cleaned.contains("name varchar(255))"));
    }

    #[test]
    fn test_clean_create_table_statement() {
        let sql = "CREATE TABLE `countries` (\n  `code` char(2) NOT NULL COMMENT 'ISO code',\n  `number` smallint(3) unsigned NOT NULL,\n  KEY `continent_code` (`continent_code`)\n) ENGINE=InnoDB";
        let cleaned = clean_statement(sql);

        assert!(!cleaned.contains("COMMENT"));
        assert!(!cleaned.contains("ENGINE"));
        assert!(!cleaned.contains('`'));
        assert!(cleaned.contains("\"countries\""));
        assert!(cleaned.contains("\"number\" smallint NOT NULL"));
        assert!(!cleaned.to_uppercase().contains("KEY \"CONTINENT_CODE\""));
    }

    #[test]
    fn test_clean_statement_trims_whitespace() {
        assert_eq!(clean_statement("  \n  "), "");
        assert_eq!(
            clean_statement("\nINSERT INTO `a` VALUES (1)\n"),
            "INSERT INTO \"a\" VALUES (1)"
        );
    }
}
