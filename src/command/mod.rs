pub mod farm_earnings;
