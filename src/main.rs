fn main() {
    slidecast_ui::start();
}
