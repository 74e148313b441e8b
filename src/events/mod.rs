pub mod form;
pub mod navigation;
pub mod pointer;
pub mod scroll;
