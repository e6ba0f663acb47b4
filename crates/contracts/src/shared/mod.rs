pub mod list_sort;
