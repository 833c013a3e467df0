// common helpers 
pub mod algorithms; 
pub mod config; 
pub mod errors; 
pub mod report; 
pub(crate) mod signs; 

// isolation 
pub mod scan; 

// refinement 
pub mod bisection;
pub mod fixed_point;
pub mod newton;
pub mod refine;
