pub mod dotfiles;
