use tome_web::App;

fn main() {
    dioxus::launch(App);
}
