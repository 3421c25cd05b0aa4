pub mod dummy_users;
