//! Account Model
//!
//! Display-only balance data. There is no mutation path; the value is a
//! fixed constant until a data source exists.

/// Account balance shown on the home screen
#[derive(Clone, Debug)]
pub struct AccountModel {
    pub balance: i64,
    pub currency_glyph: String,
}

impl AccountModel {
    pub fn new() -> Self {
        Self {
            balance: 1420,
            currency_glyph: "€".to_string(),
        }
    }

    /// Balance formatted for display (thousands grouping)
    pub fn display_balance(&self) -> String {
        crate::logic::formatting::format_amount(self.balance)
    }
}

impl Default for AccountModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_defaults() {
        let account = AccountModel::new();
        assert_eq!(account.balance, 1420);
        assert_eq!(account.currency_glyph, "€");
    }

    #[test]
    fn test_display_balance_grouped() {
        let account = AccountModel::new();
        assert_eq!(account.display_balance(), "1 420");
    }

    #[test]
    fn test_account_model_is_cloneable() {
        let account = AccountModel::new();
        let _cloned = account.clone();
    }
}
