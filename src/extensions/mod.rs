pub mod path_ext;
