pub mod receptionist;
