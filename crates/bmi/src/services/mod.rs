pub mod bmi_computation;
