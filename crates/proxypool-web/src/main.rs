fn main() {
    proxypool_web::mount();
}
