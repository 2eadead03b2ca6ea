mod list;
mod show;
mod solve;
