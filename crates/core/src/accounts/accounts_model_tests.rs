//! Tests for account domain models.

#[cfg(test)]
mod tests {
    use crate::accounts::{Account, AccountAggregate, NewAccount};
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn create_test_account() -> Account {
        Account {
            id: "acc-1".to_string(),
            name: "Checking".to_string(),
            starting_balance: dec!(1000),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_account_validate_ok() {
        let new_account = NewAccount {
            id: None,
            name: "Checking".to_string(),
            starting_balance: dec!(100),
        };
        assert!(new_account.validate().is_ok());
    }

    #[test]
    fn test_new_account_empty_name_rejected() {
        let new_account = NewAccount {
            id: None,
            name: "   ".to_string(),
            starting_balance: dec!(100),
        };
        assert!(new_account.validate().is_err());
    }

    #[test]
    fn test_new_account_negative_starting_balance_rejected() {
        let new_account = NewAccount {
            id: None,
            name: "Checking".to_string(),
            starting_balance: dec!(-1),
        };
        assert!(new_account.validate().is_err());
    }

    #[test]
    fn test_apply_aggregate_overwrites_derived_fields() {
        let mut account = create_test_account();
        let aggregate = AccountAggregate {
            total_income: dec!(500),
            total_expense: dec!(200),
            current_balance: dec!(1300),
            monthly_savings: dec!(1300),
            savings_rate: dec!(260),
        };
        let now = NaiveDateTime::default();
        account.apply_aggregate(&aggregate, now);

        assert_eq!(account.total_income, dec!(500));
        assert_eq!(account.total_expense, dec!(200));
        assert_eq!(account.current_balance, dec!(1300));
        assert_eq!(account.monthly_savings, dec!(1300));
        assert_eq!(account.savings_rate, dec!(260));
        // Starting balance is never touched by aggregation.
        assert_eq!(account.starting_balance, dec!(1000));
    }

    #[test]
    fn test_account_serialization_uses_camel_case() {
        let account = create_test_account();
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("startingBalance"));
        assert!(json.contains("currentBalance"));
        assert!(json.contains("savingsRate"));

        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.starting_balance, Decimal::from(1000));
    }
}
